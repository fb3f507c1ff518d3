use statik::config::Config;
use statik::server;

/// Returns the single positional port argument, or the usage line.
fn parse_port(args: &[String]) -> Result<&str, String> {
    let prog = args.first().map(String::as_str).unwrap_or("statik");
    match args {
        [_, port] => Ok(port.as_str()),
        _ => Err(format!("usage: {prog} <port>")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let port = match parse_port(&args) {
        Ok(port) => port.to_string(),
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    tokio::select! {
        res = server::listener::run(&port, &cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_exactly_one_port() {
        assert_eq!(parse_port(&args(&["statik", "8080"])), Ok("8080"));
    }

    #[test]
    fn rejects_missing_or_extra_arguments() {
        assert_eq!(
            parse_port(&args(&["statik"])),
            Err("usage: statik <port>".to_string())
        );
        assert!(parse_port(&args(&["statik", "80", "81"])).is_err());
        assert!(parse_port(&[]).is_err());
    }
}
