use arith_rs::{EngineConfig, Evaluator, compute, interp};

fn main() {
    for expr in [
        "2 + 3 * 4",
        "1 + ( 2.5 * 3 - ( 4 / 5.7 ) - 6.01 ) + 7",
        "-1+-2.1",
        "1(-2)",
        "5/0",
        "1++1",
    ] {
        let out = compute(expr);
        if out.valid {
            println!("{:<45} = {}", expr, out.result);
        } else {
            println!("{:<45}   invalid ({})", expr, interp(expr).unwrap_err());
        }
    }

    let mut evaluator = Evaluator::with_config(EngineConfig::new().with_precision(8));
    println!("22/7 to 8 places = {}", evaluator.compute("22/7").result);
}
