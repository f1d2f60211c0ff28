//! Id lookup tests.

use crate::fixture::example_index;

fn get_id(query: &str) -> Option<String> {
    example_index().get(query).map(|r| r.id.clone())
}

#[test]
fn exact_ids() {
    for id in [
        "(myclass:class)",
        "(myclass:constructor)",
        "(myclass:class).(mymethod:instance,2).(overload1:parameter)",
        "(myinterface:interface).(mymethodsignature:0)",
        "(mynamespace:namespace).mynamespacetype",
        "(myfunction:1).(param1:parameter)",
        "mytype",
        "(myextendedenum:namespace).(myextendedenummethod:function)",
    ] {
        assert_eq!(get_id(id).as_deref(), Some(id));
    }
}

#[test]
fn ids_compare_case_insensitively() {
    assert_eq!(
        get_id("(MyClass:class).(myMethod:instance,1)").as_deref(),
        Some("(myclass:class).(mymethod:instance,1)")
    );
    assert_eq!(get_id("  MyType ").as_deref(), Some("mytype"));
}

#[test]
fn legacy_method_ids_find_the_first_overload() {
    assert_eq!(
        get_id("(MyClass:class).(myMethod:instance)").as_deref(),
        Some("(myclass:class).(mymethod:instance,1)")
    );
    assert_eq!(
        get_id("(MyClass:class).(myMethod:instance).(param1:parameter)").as_deref(),
        Some("(myclass:class).(mymethod:instance,1).(param1:parameter)")
    );
    assert_eq!(
        get_id("(MyClass:class).(myStaticMethod:static)").as_deref(),
        Some("(myclass:class).(mystaticmethod:static,1)")
    );
}

#[test]
fn legacy_function_ids_find_the_first_overload() {
    assert_eq!(get_id("(myFunction:function)").as_deref(), Some("(myfunction:1)"));
    assert_eq!(
        get_id("(myFunction:function).(param1:parameter)").as_deref(),
        Some("(myfunction:1).(param1:parameter)")
    );
    assert_eq!(
        get_id("(MyFunctionWithNamespace:function)").as_deref(),
        Some("(myfunctionwithnamespace:1)")
    );
}

#[test]
fn exact_function_ids_are_not_rewritten() {
    assert_eq!(
        get_id("(MyNamespace:namespace).(myNamespaceFunction:function)").as_deref(),
        Some("(mynamespace:namespace).(mynamespacefunction:function)")
    );
}

#[test]
fn misses() {
    assert_eq!(get_id("carrot cake"), None);
    assert_eq!(get_id("(myclass:class).(nothing:instance)"), None);
    assert_eq!(get_id("(myinternalclass:class)"), None);
    assert_eq!(get_id(""), None);
}

#[test]
fn children_in_walk_order() {
    let index = example_index();
    let children: Vec<_> = index
        .children("(MyEnum:enum)")
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(children, vec!["(myenum:enum).myfield1", "(myenum:enum).myfield2"]);

    let params: Vec<_> = index
        .children("(myfunction:2)")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(params, vec!["param1", "param2"]);
}

#[test]
fn completions_by_prefix() {
    let index = example_index();
    assert_eq!(
        index.completions("(myfunction:"),
        vec![
            "(myfunction:1)",
            "(myfunction:1).(param1:parameter)",
            "(myfunction:2)",
            "(myfunction:2).(param1:parameter)",
            "(myfunction:2).(param2:parameter)",
        ]
    );
    assert!(index.completions("(zzz").is_empty());
}
