use arith_rs::validator::{check_structure, is_supported_char};
use arith_rs::{ExprError, validate};

#[test]
fn test_structurally_valid_expressions() {
    let valid = [
        "0",
        "42",
        "3.",
        ".25",
        "-7",
        "1+2-3*4/5",
        "((1))",
        "(1)+(2)",
        "2(3)",
        "(1)(2)",
        "1 + ( 2.5 * 3 - ( 4 / 5.7 ) - 6.01 ) + 7",
        "-1+-2.1",
        "1.5/-2",
        "1*-2",
        "1(-2)",
        "-(-1)",
    ];
    for expr in valid {
        assert!(validate(expr), "expected '{}' to be valid", expr);
    }
}

#[test]
fn test_character_set_alone_is_not_enough() {
    // Every one of these only uses accepted characters.
    let malformed = [
        "1++1", "(()", "*5", "5*", "", "()", "(", ")", "1(", "(1", "1)", "/", ".", "1.2.3",
        "..5", "(*1)", "(1-)", "--1", "(2)3", "2 (3) 4",
    ];
    for expr in malformed {
        assert!(
            expr.chars().all(|c| is_supported_char(c) || c == ' '),
            "{}",
            expr
        );
        assert!(!validate(expr), "expected '{}' to be invalid", expr);
    }
}

#[test]
fn test_unsupported_characters() {
    for c in ['a', 'x', '^', '%', '=', ',', '_', 'π', 'e', '[', '{'] {
        assert!(!is_supported_char(c));
        let expr = format!("1+{}2", c);
        assert!(!validate(&expr), "expected '{}' to be invalid", expr);
        assert_eq!(
            check_structure(&expr, 100),
            Err(ExprError::UnsupportedCharacter {
                position: 2,
                found: c
            })
        );
    }
}

#[test]
fn test_positions_count_characters_not_bytes() {
    assert_eq!(
        check_structure("ππ", 100),
        Err(ExprError::UnsupportedCharacter {
            position: 0,
            found: 'π'
        })
    );
    assert_eq!(
        check_structure("1 + 2 +", 100),
        Err(ExprError::Syntax {
            position: 7,
            reason: "operator without a right operand"
        })
    );
}
