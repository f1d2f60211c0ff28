//! Name resolution tests.

use apiref_foundation::Kind;
use apiref_index::{ModelIndex, Resolver, Strategy};
use apiref_model::{Declaration, FunctionDecl, MethodDecl, ModelBuilder};
use apiref_walker::{RecordDetail, WalkConfig};

use crate::fixture::example_index;

fn resolve_id(query: &str, hint: Option<Kind>) -> Option<String> {
    example_index().resolve(query, hint).map(|r| r.id.clone())
}

#[test]
fn canonical_ids_resolve_to_themselves() {
    assert_eq!(
        resolve_id("(MyClass:class).(myMethod:instance,2).(overload1:parameter)", None).as_deref(),
        Some("(myclass:class).(mymethod:instance,2).(overload1:parameter)")
    );
    assert_eq!(
        resolve_id("(MyClass:constructor)", None).as_deref(),
        Some("(myclass:constructor)")
    );
}

#[test]
fn partial_names() {
    let cases = [
        ("MyClass", "(myclass:class)"),
        ("MyClass.myMethod", "(myclass:class).(mymethod:instance,1)"),
        ("MyClass.myStaticMethod", "(myclass:class).(mystaticmethod:static,1)"),
        ("MyClass.myProperty", "(myclass:class).(myproperty:instance)"),
        ("MyInterface.myMethodSignature", "(myinterface:interface).(mymethodsignature:0)"),
        ("MyNamespace.MyNamespaceInterface", "(mynamespace:namespace).(mynamespaceinterface:interface)"),
        ("myFunction", "(myfunction:1)"),
        ("MY_VARIABLE", "(my_variable:variable)"),
        ("MyType", "mytype"),
        ("MyEnum.myField1", "(myenum:enum).myfield1"),
        ("MyFunctionWithNamespace", "(myfunctionwithnamespace:1)"),
        (
            "MyFunctionWithNamespace.myFunctionWithNamespaceFunction",
            "(myfunctionwithnamespace:namespace).(myfunctionwithnamespacefunction:function)",
        ),
        ("MyExtendedEnum.MyExtendedEnumField", "(myextendedenum:enum).myextendedenumfield"),
        (
            "MyExtendedEnum.myExtendedEnumMethod",
            "(myextendedenum:namespace).(myextendedenummethod:function)",
        ),
    ];
    for (query, expected) in cases {
        assert_eq!(resolve_id(query, None).as_deref(), Some(expected), "query {query}");
    }
}

#[test]
fn trailing_call_parentheses_are_ignored() {
    assert_eq!(
        resolve_id("MyClass.myMethod()", None).as_deref(),
        Some("(myclass:class).(mymethod:instance,1)")
    );
    assert_eq!(resolve_id("myFunction()", None).as_deref(), Some("(myfunction:1)"));
    assert_eq!(
        resolve_id("MyFunctionWithNamespace()", None).as_deref(),
        Some("(myfunctionwithnamespace:1)")
    );
}

#[test]
fn member_names_resolve_without_their_owner() {
    assert_eq!(
        resolve_id("myStaticProperty", None).as_deref(),
        Some("(myclass:class).(mystaticproperty:static)")
    );
    assert_eq!(
        resolve_id("myNamespaceType", None).as_deref(),
        Some("(mynamespace:namespace).mynamespacetype")
    );
}

#[test]
fn kind_hints_pick_between_merged_declarations() {
    assert_eq!(
        resolve_id("MyExtendedEnum", None).as_deref(),
        Some("(myextendedenum:enum)")
    );
    assert_eq!(
        resolve_id("MyExtendedEnum", Some(Kind::Enum)).as_deref(),
        Some("(myextendedenum:enum)")
    );
    assert_eq!(
        resolve_id("MyExtendedEnum", Some(Kind::Namespace)).as_deref(),
        Some("(myextendedenum:namespace)")
    );
    assert_eq!(
        resolve_id("MyFunctionWithNamespace", Some(Kind::Namespace)).as_deref(),
        Some("(myfunctionwithnamespace:namespace)")
    );
    assert_eq!(resolve_id("MyExtendedEnum", Some(Kind::Class)), None);
}

#[test]
fn ambiguous_matches_list_every_candidate() {
    let index = example_index();
    let resolution = Resolver::new(&index).resolve_all("myFunction", None).unwrap();
    assert_eq!(resolution.strategy, Strategy::Path);
    assert!(resolution.is_ambiguous());
    let ids: Vec<_> = resolution.candidates.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["(myfunction:1)", "(myfunction:2)"]);
}

#[test]
fn strategies_report_what_matched() {
    let index = example_index();
    let resolver = Resolver::new(&index);
    let strategy = |q: &str| resolver.resolve_all(q, None).map(|r| r.strategy);
    assert_eq!(strategy("(myclass:class)"), Some(Strategy::Id));
    assert_eq!(strategy("MyClass.myProperty"), Some(Strategy::Path));
    assert_eq!(strategy("MyClass"), Some(Strategy::Path));
}

#[test]
fn class_names_do_not_match_their_constructor() {
    let index = example_index();
    let resolution = Resolver::new(&index).resolve_all("MyClass", None).unwrap();
    assert_eq!(resolution.candidates.len(), 1);
    assert_eq!(resolution.candidates[0].kind, Kind::Class);
}

#[test]
fn unknown_queries_resolve_to_nothing() {
    assert_eq!(resolve_id("carrot cake", None), None);
    assert_eq!(resolve_id("MyClass.nothing", None), None);
    assert_eq!(resolve_id("", None), None);
    assert_eq!(resolve_id("MyBetaClass", None), None);
}

/// Overloads numbered from zero, with the later overload declared first.
fn zero_based_index() -> ModelIndex {
    let mut b = ModelBuilder::new(Declaration::package("pkg"));
    let entry = b.add(b.root(), Declaration::entry_point(""));
    for index in [1, 0] {
        b.add(
            entry,
            Declaration::function(
                "myFunction",
                FunctionDecl::new("void").with_overload_index(index),
            ),
        );
    }
    let class = b.add(entry, Declaration::class("C"));
    for index in [1, 0] {
        b.add(
            class,
            Declaration::method(
                "m",
                MethodDecl::instance(FunctionDecl::new("void").with_overload_index(index)),
            ),
        );
    }
    ModelIndex::from_model(&b.build(), &WalkConfig::public()).unwrap()
}

#[test]
fn zero_based_overloads_resolve_to_overload_zero() {
    let index = zero_based_index();
    assert_eq!(
        index.resolve("myFunction", None).map(|r| r.id.as_str()),
        Some("(myfunction:function)")
    );
    assert_eq!(
        index.resolve("C.m()", None).map(|r| r.id.as_str()),
        Some("(c:class).(m:instance)")
    );
}

#[test]
fn zero_based_class_lists_only_overload_zero() {
    let index = zero_based_index();
    let class = index.get("(c:class)").unwrap();
    let RecordDetail::Container { methods, .. } = &class.detail else {
        panic!("expected container detail, got {:?}", class.detail);
    };
    assert_eq!(methods, &vec!["(c:class).(m:instance)".to_string()]);
}

#[test]
fn zero_based_overload_lists_exclude_self() {
    let index = zero_based_index();
    let overloads = |id: &str| index.get(id).unwrap().overloads().to_vec();
    assert_eq!(overloads("(myfunction:function)"), vec!["(myfunction:1)".to_string()]);
    assert_eq!(overloads("(myfunction:1)"), vec!["(myfunction:function)".to_string()]);
    assert_eq!(overloads("(c:class).(m:instance)"), vec!["(c:class).(m:instance,1)".to_string()]);
    assert_eq!(overloads("(c:class).(m:instance,1)"), vec!["(c:class).(m:instance)".to_string()]);
}
