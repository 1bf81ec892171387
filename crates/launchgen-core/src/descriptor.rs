//! Decoding of IntelliJ run configuration files.
//!
//! A run configuration file looks like:
//!
//! ```xml
//! <component name="ProjectRunConfigurationManager">
//!   <configuration default="false" name="Main" type="Application" factoryName="Application">
//!     <option name="MAIN_CLASS_NAME" value="com.example.Main" />
//!     <module name="app" />
//!     <method v="2">
//!       <option name="Make" enabled="true" />
//!     </method>
//!   </configuration>
//! </component>
//! ```
//!
//! Only the `<component>` and `<configuration>` wrappers are required. Unknown elements and
//! attributes inside them are ignored.

use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// One parsed run configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Descriptor {
    /// `component/@name`, usually `ProjectRunConfigurationManager`.
    pub component: Option<String>,
    /// `configuration/@name`; the launch entry name.
    pub name: Option<String>,
    /// `configuration/@type`, e.g. `Application`.
    pub kind: Option<String>,
    pub factory_name: Option<String>,
    pub is_default: Option<bool>,
    /// Children of `<configuration>` in document order.
    pub children: Vec<DescriptorChild>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorChild {
    /// `<option name=".." value=".." />`
    Option {
        name: Option<String>,
        value: Option<String>,
    },
    /// `<module name=".." />`
    ModuleRef { name: Option<String> },
    /// `<method v="..">` with its nested options.
    Method(Method),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Method {
    pub version: Option<u8>,
    pub options: Vec<MethodOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodOption {
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

impl Descriptor {
    /// Decode a run configuration from XML text.
    pub fn parse(text: &str) -> ConvertResult<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)
            .map_err(|err| ConvertError::malformed(format!("invalid XML: {err}")))?;

        let component = doc.root_element();
        if !component.has_tag_name("component") {
            return Err(ConvertError::malformed(format!(
                "expected `<component>` root element, found `<{}>`",
                component.tag_name().name()
            )));
        }

        let configuration = child_element(&component, "configuration").ok_or_else(|| {
            ConvertError::malformed("missing `<configuration>` element inside `<component>`")
        })?;

        let mut children = Vec::new();
        for child in configuration.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "option" => children.push(DescriptorChild::Option {
                    name: attr(&child, "name"),
                    value: attr(&child, "value"),
                }),
                "module" => children.push(DescriptorChild::ModuleRef {
                    name: attr(&child, "name"),
                }),
                "method" => children.push(DescriptorChild::Method(parse_method(&child)?)),
                _ => {}
            }
        }

        Ok(Descriptor {
            component: attr(&component, "name"),
            name: attr(&configuration, "name"),
            kind: attr(&configuration, "type"),
            factory_name: attr(&configuration, "factoryName"),
            is_default: bool_attr(&configuration, "default")?,
            children,
        })
    }

    /// Read and decode a run configuration file.
    pub fn from_file(path: &Path) -> ConvertResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|err| {
            ConvertError::malformed(format!("invalid UTF-8: {err}")).with_path(path)
        })?;
        Self::parse(&text).map_err(|err| err.with_path(path))
    }
}

fn parse_method(node: &roxmltree::Node<'_, '_>) -> ConvertResult<Method> {
    let version = match node.attribute("v") {
        Some(raw) => Some(raw.trim().parse::<u8>().map_err(|_| {
            ConvertError::malformed(format!(
                "attribute `v` of `<method>` is not an unsigned byte: {raw:?}"
            ))
        })?),
        None => None,
    };

    let mut options = Vec::new();
    for option in node
        .children()
        .filter(|n| n.is_element() && n.has_tag_name("option"))
    {
        options.push(MethodOption {
            name: attr(&option, "name"),
            enabled: bool_attr(&option, "enabled")?,
        });
    }

    Ok(Method { version, options })
}

fn child_element<'a, 'input>(
    node: &roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

fn attr(node: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

fn bool_attr(node: &roxmltree::Node<'_, '_>, name: &str) -> ConvertResult<Option<bool>> {
    let Some(raw) = node.attribute(name) else {
        return Ok(None);
    };
    match raw.trim() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(ConvertError::malformed(format!(
            "attribute `{name}` of `<{}>` is not a boolean: {raw:?}",
            node.tag_name().name()
        ))),
    }
}
