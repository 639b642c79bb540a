use brdoc::*;

fn main() {
    println!("=== CPF/CNPJ Validation ===\n");

    let inputs = [
        "156.846.111-92",
        "156.846.111-93", // last check digit off by one
        "111.111.111-11", // repeated digits
        "44.679.387/0001-20",
        "00000000000000", // all-zero CNPJ
        "013.163.591-3", // too short
    ];

    for input in &inputs {
        match validate(*input) {
            Ok(kind) => println!("  {input} => valid {kind}"),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    println!("\n=== Formatting ===\n");

    for raw in ["00000000191", "12345678000100", "0", "aaaaaaaaaaa"] {
        println!("  {raw:>18} => {}", format_any(raw));
    }

    println!("\n=== Check-Digit Generation ===\n");

    for payload in ["156846111", "44.679.387/0001"] {
        match complete(payload) {
            Some(full) => println!("  {payload} => {}", format_any(&full)),
            None => println!("  {payload} => not a CPF/CNPJ payload"),
        }
    }
}
