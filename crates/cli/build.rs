use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("excerpta")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Excerpta Contributors")
        .about("Extract web articles into token-counted Markdown")
        .arg(clap::arg!([URL] "URL of the article to extract (http or https)"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: article-<timestamp>.md)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (markdown, text)")
                .value_name("FORMAT")
                .default_value("markdown")
                .value_parser(["markdown", "text"]),
        )
        .arg(clap::arg!(--max_tokens <NUM> "Token budget for the content body"))
        .arg(clap::arg!(--no_summary "Skip summary resolution"))
        .arg(clap::arg!(--no_metadata "Skip publish-date and author resolution"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable step-by-step progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "excerpta", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "excerpta", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "excerpta", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "excerpta", &completions_dir).unwrap();
}
