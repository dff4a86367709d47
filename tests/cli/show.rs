use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PROPERTIES};

#[test]
fn test_show_info_comment_only() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(
        test.subcommand("show")
            .args(["compiler.properties", "compiler.warn.unused"]),
        @r"
success: true
exit_code: 0
----- stdout -----
# 0: list of symbol
compiler.warn.unused=\
    unused: {0}

----- stderr -----
");

    Ok(())
}

#[test]
fn test_show_all_comments() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    // The trailing empty line belongs to the message.
    assert_cmd_snapshot!(
        test.subcommand("show")
            .args(["compiler.properties", "compiler.warn.unused", "--all-comments"]),
        @r"
success: true
exit_code: 0
----- stdout -----
# 0: list of symbol
compiler.warn.unused=\
    unused: {0}


----- stderr -----
");

    Ok(())
}

#[test]
fn test_show_policy_from_config() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;
    test.write_file(
        ".proptypesrc.json",
        r#"{ "includeAllPrecedingComments": true }"#,
    )?;

    assert_cmd_snapshot!(
        test.subcommand("show")
            .args(["compiler.properties", "compiler.err.cant.apply.symbol"]),
        @r"
success: true
exit_code: 0
----- stdout -----
# Compiler diagnostics

# 0: symbol, 1: type
compiler.err.cant.apply.symbol=\
    {0} cannot be applied to {1}


----- stderr -----
");

    Ok(())
}

#[test]
fn test_show_verbose_lists_placeholders() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(
        test.subcommand("show")
            .args(["compiler.properties", "compiler.err.cant.apply.symbol", "-v"]),
        @r"
success: true
exit_code: 0
----- stdout -----
# 0: symbol, 1: type
compiler.err.cant.apply.symbol=\
    {0} cannot be applied to {1}

----- stderr -----
Note: No .proptypesrc.json found, using default configuration
Note: Indexed 12 lines, 3 messages with prefix 'compiler.'
Note: placeholders used: {0}, {1}
");

    Ok(())
}

#[test]
fn test_show_unknown_key() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(
        test.subcommand("show")
            .args(["compiler.properties", "compiler.err.nope"]),
        @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Key 'compiler.err.nope' not found in compiler.properties
");

    Ok(())
}
