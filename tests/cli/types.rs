use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PROPERTIES};

#[test]
fn test_types_text() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(test.subcommand("types").arg("compiler.properties"), @r"
success: true
exit_code: 0
----- stdout -----
compiler.err.cant.apply.symbol
  {0}: symbol (Symbol)
  {1}: type (Type)
compiler.misc.no.args (no type comment)
compiler.warn.unused
  {0}: list of symbol (List<Symbol>)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_types_json() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(
        test.subcommand("types")
            .args(["compiler.properties", "--json"]),
        @r#"
success: true
exit_code: 0
----- stdout -----
[
  {
    "key": "compiler.err.cant.apply.symbol",
    "line": 4,
    "value": "{0} cannot be applied to {1}",
    "placeholders": [
      0,
      1
    ],
    "types": [
      {
        "index": 0,
        "kind": "symbol",
        "hint": "Symbol"
      },
      {
        "index": 1,
        "kind": "type",
        "hint": "Type"
      }
    ]
  },
  {
    "key": "compiler.misc.no.args",
    "line": 11,
    "value": "nothing to see",
    "placeholders": [],
    "types": []
  },
  {
    "key": "compiler.warn.unused",
    "line": 8,
    "value": "unused: {0}",
    "placeholders": [
      0
    ],
    "types": [
      {
        "index": 0,
        "kind": "list of symbol",
        "hint": "List<Symbol>"
      }
    ]
  }
]

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_stats() -> Result<()> {
    let test = CliTest::with_file("compiler.properties", PROPERTIES)?;

    assert_cmd_snapshot!(test.subcommand("stats").arg("compiler.properties"), @r"
success: true
exit_code: 0
----- stdout -----
2  symbol
1  list of
1  type

----- stderr -----
");

    Ok(())
}
