use brdoc::audit::{Arg, AuditedValidator, Invocation, Operation};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brdoc::audit=info".into()),
        )
        .init();

    let validator = AuditedValidator::new().with_invocation(
        Operation::Format,
        Invocation::new("document", "format")
            .description("Formatação para exibição")
            .record_result(false),
    );

    validator.is_valid("156.846.111-92");
    validator.validate("44.679.387/0001-21").ok();
    validator.format("00000000191");

    // Any other call can be wrapped the same way.
    let lookup = Invocation::new("cadastro", "find_taxpayer")
        .description("Busca de contribuinte")
        .record_args(&["cpf"]);
    let cpf = "013.163.591-31";
    let name = lookup.run(&[Arg::new("cpf", &cpf), Arg::new("api_key", &"secret")], || {
        if brdoc::is_valid(cpf) {
            Some("Maria")
        } else {
            None
        }
    });
    println!("found: {name:?}");
}
