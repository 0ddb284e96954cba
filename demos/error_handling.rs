//! Demonstrate how scan and parse errors are reported.

fn main() {
    // Unexpected characters are skipped, scanning carries on
    let scanned = lox_front::scan("1 @ 2 $ 3");
    for err in &scanned.errors {
        println!("Lex error: {err}");
        println!("  Kind: {:?}", err.kind);
        println!("  Line: {}", err.line);
    }
    println!("Tokens still produced: {}", scanned.tokens.len());

    println!();

    // Unterminated string swallows the rest of the input
    let scanned = lox_front::scan("\"never closed\n1 + 2");
    for err in &scanned.errors {
        println!("Lex error: {err}");
    }

    println!();

    // Parse errors skip to the next `;` and keep going
    match lox_front::parse_str("(1 + 2; 3 * ; 4 - 1") {
        Ok(exprs) => {
            for expr in exprs {
                println!("{expr}");
            }
        }
        Err(errors) => {
            for err in errors {
                match err {
                    lox_front::Error::Lex(e) => println!("Lex error: {e}"),
                    lox_front::Error::Parse(e) => {
                        println!("Parse error: {e}");
                        println!("  Kind: {:?}", e.kind);
                    }
                }
            }
        }
    }
}
