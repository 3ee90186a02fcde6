use super::*;
use crate::errors::{division_by_zero, ErrorKind};
use crate::{destroy, print};

fn numbers(ns: &[i64]) -> SExpr {
    ns.iter().copied().map(Value::number).collect()
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn factories_build_each_variant() {
        assert_eq!(Value::number(7).as_number(), Some(ScalarInt::new(7)));
        assert_eq!(
            Value::error(ErrorKind::BadNumber, "invalid number: x").error_kind(),
            Some(ErrorKind::BadNumber)
        );
        assert_eq!(Value::symbol("+"), Value::Symbol("+".to_owned()));
        assert_eq!(Value::sexpr(), Value::SExpr(SExpr::new()));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::number(1).type_name(), "number");
        assert_eq!(Value::from(division_by_zero()).type_name(), "error");
        assert_eq!(Value::symbol("*").type_name(), "symbol");
        assert_eq!(Value::sexpr().type_name(), "s-expression");
    }
}

mod sequence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_grows_in_order() {
        let mut cells = SExpr::new();
        cells.push(Value::symbol("+"));
        cells.push(Value::number(1));
        assert_eq!(cells.len(), 2);
        assert_eq!(cells.get(0), Some(&Value::symbol("+")));
        assert_eq!(cells.get(1), Some(&Value::number(1)));
    }

    #[test]
    fn pop_at_shifts_later_children_left() {
        let mut cells = numbers(&[10, 20, 30, 40]);
        assert_eq!(cells.pop_at(1), Value::number(20));
        assert_eq!(cells.len(), 3);
        assert_eq!(cells, numbers(&[10, 30, 40]));
    }

    #[test]
    fn pop_at_last_index() {
        let mut cells = numbers(&[1, 2]);
        assert_eq!(cells.pop_at(1), Value::number(2));
        assert_eq!(cells, numbers(&[1]));
    }

    #[test]
    fn take_at_returns_child_and_discards_rest() {
        let cells = numbers(&[1, 2, 3]);
        assert_eq!(cells.take_at(2), Value::number(3));
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn pop_at_out_of_bounds_panics() {
        let mut cells = numbers(&[1]);
        cells.pop_at(1);
    }

    #[test]
    fn map_in_place_visits_left_to_right() {
        let mut cells = numbers(&[1, 2, 3]);
        let mut seen = Vec::new();
        cells.map_in_place(|v| {
            seen.push(v.clone());
            Value::symbol(v.to_string())
        });
        assert_eq!(seen, vec![Value::number(1), Value::number(2), Value::number(3)]);
        assert_eq!(print(&Value::SExpr(cells)), "(1 2 3)");
    }
}

mod printer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn atoms() {
        assert_eq!(print(&Value::number(-5)), "-5");
        assert_eq!(print(&Value::symbol("!")), "!");
        assert_eq!(print(&division_by_zero().into()), "Error: division by zero");
    }

    #[test]
    fn empty_sexpr() {
        assert_eq!(print(&Value::sexpr()), "()");
    }

    #[test]
    fn nested_sexpr() {
        let inner = Value::sexpr_of([Value::symbol("-"), Value::number(9), Value::number(4)]);
        let outer = Value::sexpr_of([Value::symbol("*"), Value::number(3), inner]);
        assert_eq!(print(&outer), "(* 3 (- 9 4))");
    }

    #[test]
    fn printing_does_not_consume() {
        let value = Value::sexpr_of([Value::number(1)]);
        let first = print(&value);
        assert_eq!(print(&value), first);
        assert_eq!(value, Value::sexpr_of([Value::number(1)]));
    }
}

mod ownership {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nest(depth: usize) -> Value {
        let mut value = Value::number(1);
        for _ in 0..depth {
            value = Value::sexpr_of([value]);
        }
        value
    }

    #[test]
    fn destroy_deeply_nested_value() {
        destroy(nest(500_000));
    }

    #[test]
    fn print_deeply_nested_value() {
        let depth = 100_000;
        let text = print(&nest(depth));
        assert_eq!(text.matches('(').count(), depth);
        assert_eq!(text.matches(')').count(), depth);
        assert!(text.starts_with("(((("));
        assert!(text.ends_with("1))))"));
    }

    #[test]
    fn clone_is_independent() {
        let mut original = numbers(&[1, 2]);
        let copy = original.clone();
        original.pop_at(0);
        assert_eq!(copy.len(), 2);
        assert_eq!(original.len(), 1);
    }
}
