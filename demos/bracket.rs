use numeth::prelude::{bracket, cell};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "x^2 - 4".to_string());

    match bracket(&input) {
        Ok(interval) => println!("[{}, {}]", cell(interval.low()), cell(interval.high())),
        Err(err) => eprintln!("{err}"),
    }
}
