//! Scan a small program, list its tokens, then print each expression.

fn main() {
    let source = "// arithmetic\n(1 + 2) * 3\n\"total\" != 4.5\n-8 / 2 >= 1;\n";

    let scanned = lox_front::scan(source);
    println!("--- tokens ({}) ---", scanned.tokens.len());
    for token in &scanned.tokens {
        println!("{token}");
    }

    let parsed = lox_front::parse(&scanned.tokens);
    println!("--- expressions ---");
    for line in parsed.rendered() {
        println!("{line}");
    }
}
