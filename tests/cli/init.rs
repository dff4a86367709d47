use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.subcommand("init"), @r#"
success: true
exit_code: 0
----- stdout -----
✓ Created .proptypesrc.json (keyPrefix: "compiler")

----- stderr -----
"#);

    assert!(test.root().join(".proptypesrc.json").exists());

    let content = test.read_file(".proptypesrc.json")?;
    insta::assert_snapshot!(content, @r#"
{
  "keyPrefix": "compiler",
  "includeAllPrecedingComments": false
}
"#);

    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["keyPrefix"], "compiler");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".proptypesrc.json", "{}")?;

    assert_cmd_snapshot!(test.subcommand("init"), @r"
success: false
exit_code: 1
----- stdout -----

----- stderr -----
Error: .proptypesrc.json already exists
");

    assert_eq!(test.read_file(".proptypesrc.json")?, "{}");

    Ok(())
}
