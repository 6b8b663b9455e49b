use protopage::write::{Generator, Result};
use std::path::Path;

fn run() -> Result<usize> {
    Generator::new()?.generate(Path::new("pages"))
}

fn main() {
    match run() {
        Ok(count) => println!("\n完成！共创建 {} 个页面", count),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
