use param_map::{ParamError, ParamMap};
use std::cell::Cell;

type Triple = (i32, bool, String);

fn triple_map() -> ParamMap<Triple> {
    ParamMap::<Triple>::new(["my_int", "enabled", "name"])
}

#[test]
fn submit_fails_while_any_parameter_is_unset_and_never_calls_the_function() {
    let mut map = triple_map();
    let calls = Cell::new(0);

    let result = map.submit(|_: i32, _: bool, _: String| {
        calls.set(calls.get() + 1);
        4
    });
    assert_eq!(result, Err(ParamError::MissingValue { index: 0 }));

    map.set("my_int", 6).unwrap();
    map.set("enabled", false).unwrap();

    let result = map.submit(|_: i32, _: bool, _: String| {
        calls.set(calls.get() + 1);
        4
    });
    assert_eq!(result, Err(ParamError::MissingValue { index: 2 }));
    assert_eq!(calls.get(), 0);
}

#[test]
fn submit_calls_the_function_with_the_stored_values_in_declared_order() {
    let mut map = triple_map();
    map.set("my_int", 6).unwrap();
    map.set("enabled", true).unwrap();
    map.set("name", "Homer Simpson".to_string()).unwrap();

    let mut seen = None;
    let result = map.submit(|my_int: i32, enabled: bool, name: String| {
        seen = Some((my_int, enabled, name));
        7
    });

    assert_eq!(result, Ok(7));
    assert_eq!(seen, Some((6, true, "Homer Simpson".to_string())));
}

#[test]
fn submit_does_not_modify_the_map() {
    let mut map = triple_map();
    map.set("my_int", 6).unwrap();
    map.set("enabled", true).unwrap();
    map.set("name", "Homer Simpson".to_string()).unwrap();

    let first = map.submit(|a: i32, _: bool, name: String| format!("{name}/{a}"));
    let second = map.submit(|a: i32, _: bool, name: String| format!("{name}/{a}"));

    assert_eq!(first, Ok("Homer Simpson/6".to_string()));
    assert_eq!(first, second);

    // Values survive the submit calls: the dispatch clones, it never moves.
    for index in 0..map.len() {
        assert_eq!(map.is_set(index), Ok(true));
    }
    assert_eq!(map.get::<String, _>("name"), Ok(&"Homer Simpson".to_string()));
}

#[test]
fn submit_observes_sets_made_between_calls() {
    let mut map = triple_map();
    map.set("my_int", 35).unwrap();
    map.set("enabled", true).unwrap();
    map.set("name", "Homer Simpson".to_string()).unwrap();

    assert_eq!(map.submit(|a: i32, _: bool, _: String| a), Ok(35));

    map.set("my_int", 38).unwrap();
    assert_eq!(map.submit(|a: i32, _: bool, _: String| a), Ok(38));
}

#[test]
fn submit_passes_the_return_value_through_unmodified() {
    let mut map = ParamMap::<(u8,)>::new(["byte"]);
    map.set("byte", 0xFFu8).unwrap();

    assert_eq!(map.submit(|b: u8| b as u16 + 1), Ok(256));
    assert_eq!(map.submit(|_: u8| ()), Ok(()));
}

#[test]
fn submit_works_with_plain_functions() {
    fn describe(name: String, age: i32) -> String {
        format!("{name} (age: {age})")
    }

    let mut map = ParamMap::<(String, i32)>::new(["name", "age"]);
    map.set("name", "Homer Simpson".to_string()).unwrap();
    map.set("age", 35).unwrap();

    assert_eq!(map.submit(describe), Ok("Homer Simpson (age: 35)".to_string()));
}

#[test]
fn cleared_map_cannot_be_submitted_until_repopulated() {
    let mut map = ParamMap::<(i32, i32)>::new(["a", "b"]);
    map.set("a", 1).unwrap();
    map.set("b", 2).unwrap();
    assert_eq!(map.submit(|a: i32, b: i32| a + b), Ok(3));

    map.clear();
    assert_eq!(
        map.submit(|a: i32, b: i32| a + b),
        Err(ParamError::MissingValue { index: 0 })
    );

    map.set_at::<0>(4);
    map.set_at::<1>(5);
    assert_eq!(map.submit(|a: i32, b: i32| a + b), Ok(9));
}

#[test]
fn submit_reports_the_first_vacant_slot() {
    let mut map = triple_map();
    map.set("enabled", true).unwrap();

    assert_eq!(
        map.submit(|_: i32, _: bool, _: String| ()),
        Err(ParamError::MissingValue { index: 0 })
    );

    map.set("my_int", 1).unwrap();
    assert_eq!(
        map.submit(|_: i32, _: bool, _: String| ()),
        Err(ParamError::MissingValue { index: 2 })
    );
}
