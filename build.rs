// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .default_value("skillet.db")
        .help("Database path")
}

fn build_cli() -> Command {
    Command::new("skillet")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Skillet Contributors")
        .about("Self-hosted recipe publishing site with server-rendered pages")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Initialize the recipe database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("seed")
                .about("Insert sample categories and recipes for local development")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("PATH")
                        .help("TOML configuration file"),
                )
                .arg(
                    Arg::new("bind")
                        .long("bind")
                        .value_name("ADDR")
                        .help("Bind address (overrides the config file)"),
                )
                .arg(db_path_arg()),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("skillet.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
