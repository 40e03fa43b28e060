#![no_main]

use libfuzzer_sys::fuzz_target;
use ripple::{ForLoopSyntax, SyntaxConfig, lexer, parser};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    // Both loop grammars, since they lex `to` differently.
    for for_loop in [ForLoopSyntax::Range, ForLoopSyntax::Iter] {
        let config = SyntaxConfig::new().with_for_loop(for_loop);
        if let Ok(tokens) = lexer::lex_with_config(source, config) {
            let _ = parser::parse_with_config(&tokens, config);
        }
    }
});
