use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("followback")
        .version("1.0.0")
        .author("Followback Contributors")
        .about("Find which target accounts do not follow you back")
        .arg(clap::arg!(<SNAPSHOT> "Exported followers HTML file, or '-' for stdin"))
        .arg(clap::arg!(--id <HANDLE> "Your own handle, excluded from the result").value_name("HANDLE"))
        .arg(clap::arg!(--"sheet-url" <URL> "Published sheet share URL holding the target list").value_name("URL"))
        .arg(
            clap::arg!(--targets <FILE> "Local CSV file holding the target list")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (list, text, json)")
                .value_name("FORMAT")
                .default_value("list")
                .value_parser(["list", "text", "json"]),
        )
        .arg(clap::arg!(--"no-banner" "Omit the header/footer banner (text format only)"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--"no-cache" "Skip reading and writing the on-disk target-list cache"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "followback", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "followback", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "followback", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "followback", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
