use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";

/// Fails the build when the embedded md2notion defaults are not valid TOML.
fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = match fs::read_to_string(DEFAULT_CONFIG) {
        Ok(content) => content,
        Err(e) => panic!("md2notion: cannot read {DEFAULT_CONFIG}: {e}"),
    };

    if let Err(e) = content.parse::<toml::Table>() {
        panic!("md2notion: {DEFAULT_CONFIG} is not valid TOML: {e}");
    }
}
