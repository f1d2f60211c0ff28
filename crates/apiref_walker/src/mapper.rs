//! Conversion of declaration nodes into flat records.

use apiref_foundation::{Kind, ReleaseTag, Result};
use apiref_model::{DocComment, DocSection, NodeKind, NodeRef, Parameter};

use crate::config::CustomBlockTags;
use crate::id::{canonical_id, parameter_id, parent_id};
use crate::record::{DocMarkup, MethodDetail, RawRecord, RecordDetail};
use crate::render::MarkupRenderer;

/// Maps declaration nodes to [`RawRecord`]s.
pub struct RecordMapper<'a> {
    tags: &'a CustomBlockTags,
    renderer: &'a dyn MarkupRenderer,
}

impl<'a> RecordMapper<'a> {
    /// Creates a mapper that renders documentation with `renderer`.
    #[must_use]
    pub fn new(tags: &'a CustomBlockTags, renderer: &'a dyn MarkupRenderer) -> Self {
        Self { tags, renderer }
    }

    /// Maps one node. Returns `Ok(None)` for kinds that produce no record.
    ///
    /// # Errors
    ///
    /// Returns an error when the node's id cannot be computed.
    pub fn map(&self, node: NodeRef<'_>) -> Result<Option<RawRecord>> {
        let Some(kind) = node.kind().record_kind() else {
            return Ok(None);
        };

        let mut record = self.common(node, kind)?;
        record.detail = match node.kind() {
            NodeKind::Model
            | NodeKind::Package
            | NodeKind::EntryPoint
            | NodeKind::None
            | NodeKind::CallSignature(_)
            | NodeKind::IndexSignature(_) => return Ok(None),
            NodeKind::Class(_) | NodeKind::Interface(_) => container_detail(node)?,
            NodeKind::Method(_)
            | NodeKind::MethodSignature(_)
            | NodeKind::Function(_)
            | NodeKind::Constructor(_)
            | NodeKind::ConstructSignature(_) => {
                let (name, signature, detail) = self.method_detail(node, &record.id)?;
                record.name = name;
                record.signature = Some(signature);
                detail
            }
            NodeKind::Enum(_) => RecordDetail::Enum {
                fields: member_ids(node, |m| matches!(m, NodeKind::EnumMember(_)))?,
            },
            NodeKind::EnumMember(decl) => RecordDetail::Typed {
                type_text: decl.initializer.clone(),
            },
            NodeKind::Property(_) | NodeKind::PropertySignature(_) | NodeKind::Variable(_) => {
                let type_text = node.kind().type_text().unwrap_or_default().to_string();
                record.signature = Some(format!(
                    "{}{}: {type_text}",
                    static_prefix(node),
                    node.name()
                ));
                RecordDetail::Typed { type_text }
            }
            NodeKind::Namespace(_) => RecordDetail::Namespace {
                members: member_ids(node, |_| true)?,
            },
            NodeKind::TypeAlias(_) => RecordDetail::Plain,
        };
        Ok(Some(record))
    }

    /// Maps the parameters of a function-like node to parameter records.
    ///
    /// Returns an empty list for nodes without a parameter list or without a
    /// record of their own.
    ///
    /// # Errors
    ///
    /// Returns an error when the owner's id cannot be computed.
    pub fn map_parameters(&self, node: NodeRef<'_>) -> Result<Vec<RawRecord>> {
        let Some(list) = node.kind().as_parameter_list() else {
            return Ok(Vec::new());
        };
        if node.kind().record_kind().is_none() || list.parameters().is_empty() {
            return Ok(Vec::new());
        }

        let owner_id = canonical_id(node)?;
        let owner_path = node.scoped_name();
        let (release_tag, visibility) = release(node);

        let records = list
            .parameters()
            .iter()
            .enumerate()
            .map(|(index, param)| RawRecord {
                id: parameter_id(&owner_id, &param.name),
                parent_id: Some(owner_id.clone()),
                name: param.name.clone(),
                fullname: format!("{owner_path}.{}", param.name),
                kind: Kind::Parameter,
                release_tag,
                visibility: visibility.to_string(),
                signature: Some(format!("{}: {}", param.name, param.type_text)),
                docs: DocMarkup {
                    summary: node
                        .docs()
                        .and_then(|docs| param_section(docs, param, index))
                        .and_then(|section| self.renderer.render_optional(section)),
                    ..DocMarkup::default()
                },
                detail: RecordDetail::Typed {
                    type_text: param.type_text.clone(),
                },
            })
            .collect();
        Ok(records)
    }

    fn common(&self, node: NodeRef<'_>, kind: Kind) -> Result<RawRecord> {
        let (release_tag, visibility) = release(node);
        Ok(RawRecord {
            id: canonical_id(node)?,
            parent_id: parent_id(node)?,
            name: node.name().to_string(),
            fullname: node.scoped_name(),
            kind,
            release_tag,
            visibility: visibility.to_string(),
            signature: node
                .excerpt()
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            docs: node.docs().map(|d| self.doc_markup(d)).unwrap_or_default(),
            detail: RecordDetail::Plain,
        })
    }

    fn doc_markup(&self, docs: &DocComment) -> DocMarkup {
        let render = |section: Option<&DocSection>| {
            section.and_then(|s| self.renderer.render_optional(s))
        };
        let custom = |tag: &str| render(docs.custom_block(tag).map(|b| &b.content));

        DocMarkup {
            summary: render(Some(&docs.summary)),
            remarks: render(docs.remarks.as_ref()),
            deprecated: render(docs.deprecated.as_ref()),
            prototype: custom(&self.tags.prototype),
            production: custom(&self.tags.production),
        }
    }

    fn method_detail(
        &self,
        node: NodeRef<'_>,
        id: &str,
    ) -> Result<(String, String, RecordDetail)> {
        let kind = node.kind();
        let params = kind
            .as_parameter_list()
            .map(|list| list.parameters())
            .unwrap_or_default();
        let args = params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let return_type = kind
            .as_return_typed()
            .map_or_else(|| "void".to_string(), |r| r.return_type().to_string());
        let is_static = kind.as_static().is_some_and(|s| s.is_static());
        let prefix = static_prefix(node);

        let is_constructor = matches!(
            kind,
            NodeKind::Constructor(_) | NodeKind::ConstructSignature(_)
        );
        let (name, signature) = match node.parent() {
            Some(owner) if is_constructor => {
                (owner.name().to_string(), format!("{}({args})", owner.name()))
            }
            Some(owner) if matches!(owner.kind(), NodeKind::Namespace(_)) => (
                node.name().to_string(),
                format!("{prefix}{}.{}({args}): {return_type}", owner.name(), node.name()),
            ),
            _ => (
                node.name().to_string(),
                format!("{prefix}{}({args}): {return_type}", node.name()),
            ),
        };

        let detail = MethodDetail {
            overload_index: kind.overload_index().unwrap_or_default(),
            overloads: overload_ids(node, id)?,
            parameters: params.iter().map(|p| parameter_id(id, &p.name)).collect(),
            is_static,
            return_type,
            return_markup: node
                .docs()
                .and_then(|d| d.returns.as_ref())
                .and_then(|s| self.renderer.render_optional(s)),
        };
        Ok((name, signature, RecordDetail::Method(detail)))
    }
}

impl std::fmt::Debug for RecordMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordMapper")
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

fn release(node: NodeRef<'_>) -> (ReleaseTag, &'static str) {
    match node.kind().release_tag() {
        Some(tag) => (tag, tag.as_str()),
        None => (ReleaseTag::None, "public"),
    }
}

fn static_prefix(node: NodeRef<'_>) -> &'static str {
    if node.kind().as_static().is_some_and(|s| s.is_static()) {
        "static "
    } else {
        ""
    }
}

fn is_function_like(kind: &NodeKind) -> bool {
    kind.record_kind().is_some_and(Kind::is_function_like)
}

/// Ids of record-bearing members selected by `filter`, in declaration order.
fn member_ids(node: NodeRef<'_>, filter: impl Fn(&NodeKind) -> bool) -> Result<Vec<String>> {
    node.members()
        .filter(|m| m.kind().record_kind().is_some() && filter(m.kind()))
        .map(canonical_id)
        .collect()
}

fn container_detail(node: NodeRef<'_>) -> Result<RecordDetail> {
    let constructor = node
        .members()
        .find(|m| {
            matches!(
                m.kind(),
                NodeKind::Constructor(_) | NodeKind::ConstructSignature(_)
            )
        })
        .map(canonical_id)
        .transpose()?;
    let properties = member_ids(node, |k| {
        matches!(k, NodeKind::Property(_) | NodeKind::PropertySignature(_))
    })?;
    let methods = node
        .members()
        .filter(|m| {
            matches!(m.kind(), NodeKind::Method(_) | NodeKind::MethodSignature(_))
                && is_primary_overload(*m)
        })
        .map(canonical_id)
        .collect::<Result<Vec<_>>>()?;

    Ok(RecordDetail::Container {
        constructor,
        properties,
        methods,
    })
}

/// Returns true if no same-named function-like sibling has a smaller overload index.
fn is_primary_overload(node: NodeRef<'_>) -> bool {
    let Some(index) = node.kind().overload_index() else {
        return true;
    };
    siblings(node)
        .filter(|s| is_function_like(s.kind()) && s.name() == node.name())
        .filter_map(|s| s.kind().overload_index())
        .all(|other| other >= index)
}

fn siblings<'a>(node: NodeRef<'a>) -> impl Iterator<Item = NodeRef<'a>> + 'a {
    let id = node.id();
    node.parent()
        .into_iter()
        .flat_map(NodeRef::members)
        .filter(move |s| s.id() != id)
}

/// Ids of same-named function-like siblings, excluding `id`.
///
/// A namespace merged with a function of the same name is not an overload.
fn overload_ids(node: NodeRef<'_>, id: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for sibling in siblings(node) {
        if !is_function_like(sibling.kind()) || sibling.name() != node.name() {
            continue;
        }
        let sibling_id = canonical_id(sibling)?;
        if sibling_id != id {
            ids.push(sibling_id);
        }
    }
    Ok(ids)
}

fn param_section<'d>(docs: &'d DocComment, param: &Parameter, index: usize) -> Option<&'d DocSection> {
    docs.param(&param.name)
        .or_else(|| docs.params.get(index))
        .map(|block| &block.content)
}
