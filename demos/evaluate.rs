use numeth::{compile, derivative, format_number, DEFAULT_DECIMALS};

fn main() {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "x^3 - 2*x - 5".to_string());
    let x: f64 = match args.next().map(|s| s.parse()) {
        Some(Ok(x)) => x,
        Some(Err(err)) => {
            eprintln!("invalid point: {err}");
            return;
        }
        None => 2.0,
    };

    let function = match compile(&input) {
        Ok(function) => function,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("{function}");
    match function.evaluate(x) {
        Ok(value) => println!("f({x}) = {}", format_number(value, DEFAULT_DECIMALS)),
        Err(err) => eprintln!("{err}"),
    }
    match derivative(&function, x) {
        Ok(slope) => println!("f'({x}) ~ {}", format_number(slope, 6)),
        Err(err) => eprintln!("{err}"),
    }
}
