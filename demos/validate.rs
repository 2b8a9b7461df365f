use numeth::{compile, is_valid};

fn main() {
    let inputs = ["x^2 - 4", "ln(x) - 1", "log(x", "y + 1", "sqrt(x - 3)"];
    for input in inputs {
        let status = if is_valid(input) { "valid" } else { "invalid" };
        match compile(input) {
            Ok(_) => println!("{input:>12}  {status}"),
            Err(err) => println!("{input:>12}  {status}: {err}"),
        }
    }
}
