use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // stdout fica reservado para a mensagem de sucesso.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = contatos::generator::run() {
        eprintln!("Erro ao criar a planilha: {err:#}");
        std::process::exit(1);
    }
}
