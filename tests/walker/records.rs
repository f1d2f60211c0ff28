//! Record shape tests.

use apiref_foundation::{Kind, ReleaseTag};
use apiref_walker::{RawRecord, RecordDetail, WalkConfig, Walker};

use crate::fixture::{example_model, example_records};

fn find<'a>(records: &'a [RawRecord], id: &str) -> &'a RawRecord {
    records
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| panic!("no record {id}"))
}

#[test]
fn class_subtree_yields_container_members_and_parameters() {
    let model = example_model();
    let class = model.find("MyClass").unwrap();
    let records = Walker::new(WalkConfig::public()).collect(class).unwrap();

    let containers = records.iter().filter(|r| r.kind == Kind::Class).count();
    let members = records
        .iter()
        .filter(|r| r.parent_id.as_deref() == Some("(myclass:class)"))
        .count();
    let params = records.iter().filter(|r| r.kind == Kind::Parameter).count();
    assert_eq!(containers, 1);
    assert_eq!(members, 6);
    assert_eq!(params, 3);
    assert_eq!(records.len(), 10);
}

#[test]
fn class_record_lists_constructor_properties_and_primary_methods() {
    let records = example_records(WalkConfig::public());
    let class = find(&records, "(myclass:class)");
    assert_eq!(class.signature.as_deref(), Some("export declare class MyClass"));

    let RecordDetail::Container {
        constructor,
        properties,
        methods,
    } = &class.detail
    else {
        panic!("expected container detail, got {:?}", class.detail);
    };
    assert_eq!(constructor.as_deref(), Some("(myclass:constructor)"));
    assert_eq!(
        properties,
        &vec![
            "(myclass:class).(myproperty:instance)".to_string(),
            "(myclass:class).(mystaticproperty:static)".to_string(),
        ]
    );
    assert!(methods.contains(&"(myclass:class).(mymethod:instance,1)".to_string()));
    assert!(!methods.contains(&"(myclass:class).(mymethod:instance,2)".to_string()));
    assert!(methods.contains(&"(myclass:class).(mystaticmethod:static,1)".to_string()));
}

#[test]
fn overloads_list_siblings_in_declaration_order() {
    let records = example_records(WalkConfig::public());

    let first = find(&records, "(myclass:class).(mymethod:instance,1)");
    assert_eq!(first.overloads(), ["(myclass:class).(mymethod:instance,2)"]);
    let second = find(&records, "(myclass:class).(mymethod:instance,2)");
    assert_eq!(second.overloads(), ["(myclass:class).(mymethod:instance,1)"]);

    let function = find(&records, "(myfunction:1)");
    assert_eq!(function.overloads(), ["(myfunction:2)"]);

    // A namespace sharing the function's name is not an overload.
    let merged = find(&records, "(myfunctionwithnamespace:1)");
    assert!(merged.overloads().is_empty());
}

#[test]
fn method_details() {
    let records = example_records(WalkConfig::public());
    let method = find(&records, "(myclass:class).(mymethod:instance,1)")
        .method()
        .unwrap();
    assert_eq!(method.overload_index, 1);
    assert!(!method.is_static);
    assert_eq!(method.return_type, "void");
    assert_eq!(method.return_markup.as_deref(), Some("Nothing at all."));
    assert_eq!(
        method.parameters,
        vec!["(myclass:class).(mymethod:instance,1).(param1:parameter)".to_string()]
    );

    let stat = find(&records, "(myclass:class).(mystaticmethod:static,1)")
        .method()
        .unwrap();
    assert!(stat.is_static);
    assert_eq!(stat.return_type, "MyClass");
}

#[test]
fn signatures() {
    let records = example_records(WalkConfig::public());
    let signature = |id: &str| find(&records, id).signature.clone();

    assert_eq!(signature("(myclass:constructor)").as_deref(), Some("MyClass(options)"));
    assert_eq!(
        signature("(myclass:class).(mymethod:instance,2)").as_deref(),
        Some("myMethod(overload1): string")
    );
    assert_eq!(
        signature("(myclass:class).(mystaticmethod:static,1)").as_deref(),
        Some("static myStaticMethod(): MyClass")
    );
    assert_eq!(
        signature("(myclass:class).(mystaticproperty:static)").as_deref(),
        Some("static myStaticProperty: string")
    );
    assert_eq!(
        signature("(mynamespace:namespace).(mynamespacefunction:function)").as_deref(),
        Some("MyNamespace.myNamespaceFunction(value): void")
    );
    assert_eq!(
        signature("(myfunction:2).(param2:parameter)").as_deref(),
        Some("param2: number")
    );
    assert_eq!(
        signature("mytype").as_deref(),
        Some("export declare type MyType = string | number")
    );
}

#[test]
fn constructor_is_named_after_its_class() {
    let records = example_records(WalkConfig::public());
    let ctor = find(&records, "(myclass:constructor)");
    assert_eq!(ctor.kind, Kind::Constructor);
    assert_eq!(ctor.name, "MyClass");
}

#[test]
fn docs_are_rendered_as_plain_text() {
    let records = example_records(WalkConfig::public());
    let class = find(&records, "(myclass:class)");
    assert_eq!(
        class.docs.summary.as_deref(),
        Some("An example class. See myMethod.")
    );
    assert_eq!(class.docs.remarks.as_deref(), Some("Remarks for the class."));
    assert_eq!(class.docs.prototype.as_deref(), Some("Use it in the library."));
    assert_eq!(class.docs.production.as_deref(), Some("`<motion.div />`"));

    let signature = find(&records, "(myinterface:interface).mypropertysignature");
    assert_eq!(signature.docs.deprecated.as_deref(), Some("Use myProperty."));

    let bare = find(&records, "(myclass:class).(mystaticproperty:static)");
    assert!(bare.docs.is_empty());
}

#[test]
fn parameter_docs_match_by_name_then_position() {
    let records = example_records(WalkConfig::public());
    let named = find(&records, "(myclass:class).(mymethod:instance,1).(param1:parameter)");
    assert_eq!(named.docs.summary.as_deref(), Some("A string parameter."));
    assert_eq!(named.type_text(), Some("string"));

    let positional = find(
        &records,
        "(myclass:class).(mymethod:instance,2).(overload1:parameter)",
    );
    assert_eq!(positional.docs.summary.as_deref(), Some("The overloaded value."));

    let undocumented = find(&records, "(myfunction:1).(param1:parameter)");
    assert_eq!(undocumented.docs.summary, None);
}

#[test]
fn enum_and_namespace_member_lists() {
    let records = example_records(WalkConfig::public());
    assert_eq!(
        find(&records, "(myenum:enum)").member_ids(),
        vec!["(myenum:enum).myfield1", "(myenum:enum).myfield2"]
    );
    assert_eq!(find(&records, "(myenum:enum).myfield1").type_text(), Some("\"a\""));
    assert_eq!(
        find(&records, "(mynamespace:namespace)").member_ids(),
        vec![
            "(mynamespace:namespace).(mynamespacefunction:function)",
            "(mynamespace:namespace).(mynamespacevariable:variable)",
            "(mynamespace:namespace).(mynamespaceinterface:interface)",
            "(mynamespace:namespace).mynamespacetype",
        ]
    );
}

#[test]
fn release_tags_and_visibility() {
    let records = example_records(WalkConfig::public());
    let class = find(&records, "(myclass:class)");
    assert_eq!(class.release_tag, ReleaseTag::Public);
    assert_eq!(class.visibility, "public");

    let param = find(&records, "(myfunction:2).(param1:parameter)");
    assert_eq!(param.release_tag, ReleaseTag::Public);
    assert_eq!(param.kind, Kind::Parameter);

    let field = find(&records, "(myenum:enum).myfield2");
    assert_eq!(field.visibility, "public");
}
