//! Default TOML config template.

/// The default config file, every setting commented out at its default.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# grip-render configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[render]
# mode = "long"              # tiny, short, long
# use_quotes = true          # quote string values
# escape_whitespace = true   # show \n and \t as escapes

[style]
# max_declaration_length = 4096   # 0-65536 bytes; longer styles are dropped

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"#
}
