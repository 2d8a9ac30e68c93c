// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_front_matter(fields: usize) -> String {
    let mut content = String::from("---\n");
    for i in 0..fields {
        if i % 4 == 0 {
            content.push_str(&format!("tags_{i}: [alpha, beta, gamma]\n"));
        } else {
            content.push_str(&format!("field_{i}: value number {i}\n"));
        }
    }
    content.push_str("---\n\n");
    content
}

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n> A quote\n> over two lines\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_document(fields: usize, size: usize) -> String {
    let mut content = generate_front_matter(fields);
    content.push_str(&generate_markdown_content(size));
    content
}
