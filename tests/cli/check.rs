use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PROPERTIES, io_error_filters};

#[test]
fn test_check_clean_file() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(test.subcommand("check").arg("compiler.properties"), @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 3 messages (2 with type comments) - no issues found

----- stderr -----
");

    Ok(())
}

#[test]
fn test_check_reports_unknown_type() -> Result<()> {
    let test = CliTest::with_file(
        "compiler.properties",
        "# 0: bogus-type, 1: symbol\ncompiler.err.foo={0} {1}\n",
    )?;

    assert_cmd_snapshot!(test.subcommand("check").arg("compiler.properties"), @r#"
success: false
exit_code: 1
----- stdout -----
✘ Checked 1 message (1 with type comments) - 1 warning

----- stderr -----
warning: unrecognized type "bogus-type"  compiler.err.foo
  --> compiler.properties:1
  |
1 | # 0: bogus-type, 1: symbol
"#);

    Ok(())
}

#[test]
fn test_check_reports_line_of_type_comment() -> Result<()> {
    let test = CliTest::with_file(
        "compiler.properties",
        r"# Header

compiler.misc.first=first

# 0: widgets
compiler.err.second=\
    {0}
",
    )?;

    assert_cmd_snapshot!(test.subcommand("check").arg("compiler.properties"), @r#"
success: false
exit_code: 1
----- stdout -----
✘ Checked 2 messages (1 with type comments) - 1 warning

----- stderr -----
warning: unrecognized type "widgets"  compiler.err.second
  --> compiler.properties:5
  |
5 | # 0: widgets
"#);

    Ok(())
}

#[test]
fn test_check_custom_key_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "launcher.properties",
        "# 0: string\nlauncher.err.foo={0}\ncompiler.err.bar=x\n",
    )?;

    assert_cmd_snapshot!(
        test.subcommand("check")
            .arg("launcher.properties")
            .args(["--key-prefix", "launcher"]),
        @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 1 message (1 with type comments) - no issues found

----- stderr -----
");

    Ok(())
}

#[test]
fn test_check_key_prefix_from_config() -> Result<()> {
    let test = CliTest::with_file(
        "launcher.properties",
        "launcher.err.foo=x\nlauncher.err.bar=y\n",
    )?;
    test.write_file(".proptypesrc.json", r#"{ "keyPrefix": "launcher" }"#)?;

    assert_cmd_snapshot!(test.subcommand("check").arg("launcher.properties"), @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 2 messages (0 with type comments) - no issues found

----- stderr -----
");

    Ok(())
}

#[test]
fn test_check_verbose_notes() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(test.subcommand("check").args(["compiler.properties", "-v"]), @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 3 messages (2 with type comments) - no issues found

----- stderr -----
Note: No .proptypesrc.json found, using default configuration
Note: Indexed 12 lines, 3 messages with prefix 'compiler.'
");

    Ok(())
}

#[test]
fn test_check_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({ filters => io_error_filters() }, {
        assert_cmd_snapshot!(test.subcommand("check").arg("missing.properties"), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Failed to open properties file: "missing.properties": [IO ERROR]
"#);
    });

    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;
    test.write_file(".proptypesrc.json", r#"{ "keyPrefix": "" }"#)?;

    assert_cmd_snapshot!(test.subcommand("check").arg("compiler.properties"), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Invalid 'keyPrefix': must not be empty
");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage: proptypes [COMMAND]"));
    assert!(stdout.contains("check"));

    Ok(())
}
