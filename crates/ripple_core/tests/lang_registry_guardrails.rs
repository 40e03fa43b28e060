use std::collections::HashMap;

use ripple_core::lang::keywords;
use ripple_core::lang::operators;
use ripple_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert_eq!(
            info.token_name,
            info.canonical.to_ascii_uppercase(),
            "keyword token name should be the upper-cased spelling for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_spellings_are_valid_identifiers() {
    // The tokenizer only re-tags identifier runs, so every keyword must look like one.
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("empty keyword spelling");
        assert!(first.is_ascii_alphabetic() || first == '_', "{:?}", info.canonical);
        assert!(chars.all(|c| c.is_ascii_alphanumeric() || c == '_'), "{:?}", info.canonical);
    }
}

#[test]
fn operators_and_punctuation_do_not_overlap() {
    let mut seen: HashMap<char, String> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_char(info.canonical), Some(info.id));
        assert_eq!(operators::as_char(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, format!("{:?}", info.id)) {
            panic!("duplicate spelling {:?}: {} and {:?}", info.canonical, prev, info.id);
        }
    }

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_char(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_char(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, format!("{:?}", info.id)) {
            panic!("duplicate spelling {:?}: {} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn exactly_one_assignment_operator() {
    let assignments = operators::OPERATORS
        .iter()
        .filter(|o| o.kind == operators::OperatorKind::Assignment)
        .count();
    assert_eq!(assignments, 1);
}
