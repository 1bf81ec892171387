use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::descriptor::{Descriptor, DescriptorChild};
use crate::error::{ConvertError, ConvertResult};

/// Debug adapter type understood by the VS Code Java debugger.
pub const JAVA_LAUNCH_TYPE: &str = "java";
pub const LAUNCH_REQUEST: &str = "launch";

pub const WORKING_DIRECTORY: &str = "WORKING_DIRECTORY";
pub const MAIN_CLASS_NAME: &str = "MAIN_CLASS_NAME";
pub const PROGRAM_PARAMETERS: &str = "PROGRAM_PARAMETERS";

pub const PROJECT_DIR_PLACEHOLDER: &str = "$PROJECT_DIR$";
pub const WORKSPACE_FOLDER_PLACEHOLDER: &str = "${workspaceFolder}";

/// One `launch.json` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEntry {
    pub kind: &'static str,
    pub name: String,
    pub request: &'static str,
    pub cwd: Option<String>,
    pub main_class: Option<String>,
    pub args: Option<Vec<String>>,
}

/// A single serialized field of a [`LaunchEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    List(&'a [String]),
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Str(value) => serializer.serialize_str(value),
            FieldValue::List(values) => values.serialize(serializer),
        }
    }
}

impl LaunchEntry {
    /// Build the launch entry for one run configuration.
    ///
    /// `module_override` replaces whatever module the descriptor names, including an empty
    /// override.
    pub fn build(descriptor: &Descriptor, module_override: Option<&str>) -> ConvertResult<Self> {
        let name = descriptor
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ConvertError::IncompleteDescriptor { path: None })?;

        let mut cwd = None;
        let mut class_name: Option<&str> = None;
        let mut module_name: Option<&str> = None;
        let mut args = None;

        for child in &descriptor.children {
            match child {
                DescriptorChild::Option {
                    name: Some(option),
                    value,
                } => match option.as_str() {
                    WORKING_DIRECTORY => {
                        if let Some(value) = value {
                            cwd = Some(rewrite_working_directory(value));
                        }
                    }
                    MAIN_CLASS_NAME => class_name = value.as_deref(),
                    PROGRAM_PARAMETERS => {
                        if let Some(value) = value {
                            args = Some(split_program_parameters(value));
                        }
                    }
                    _ => {}
                },
                // Last module reference wins.
                DescriptorChild::ModuleRef { name } => module_name = name.as_deref(),
                DescriptorChild::Option { name: None, .. } | DescriptorChild::Method(_) => {}
            }
        }

        let module_name = resolve_module(module_name, module_override);

        Ok(LaunchEntry {
            kind: JAVA_LAUNCH_TYPE,
            name: name.to_string(),
            request: LAUNCH_REQUEST,
            cwd,
            main_class: main_class(module_name, class_name),
            args,
        })
    }

    /// Present fields in `launch.json` order: `type`, `name`, `request`, `cwd`,
    /// `mainClass`, `args`.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        let mut fields = vec![
            ("type", FieldValue::Str(self.kind)),
            ("name", FieldValue::Str(&self.name)),
            ("request", FieldValue::Str(self.request)),
        ];
        if let Some(cwd) = &self.cwd {
            fields.push(("cwd", FieldValue::Str(cwd)));
        }
        if let Some(main_class) = &self.main_class {
            fields.push(("mainClass", FieldValue::Str(main_class)));
        }
        if let Some(args) = &self.args {
            fields.push(("args", FieldValue::List(args)));
        }
        fields
    }
}

impl Serialize for LaunchEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The `--module` override, when given, beats any module named by the descriptor.
pub fn resolve_module<'a>(
    pending: Option<&'a str>,
    module_override: Option<&'a str>,
) -> Option<&'a str> {
    module_override.or(pending)
}

pub fn main_class(module_name: Option<&str>, class_name: Option<&str>) -> Option<String> {
    match (module_name, class_name) {
        (Some(module), Some(class)) => Some(format!("{module}/{class}")),
        (None, Some(class)) => Some(class.to_string()),
        (_, None) => None,
    }
}

/// Swap `$PROJECT_DIR$` for `${workspaceFolder}` and drop one trailing `/`.
pub fn rewrite_working_directory(value: &str) -> String {
    let cwd = value.replace(PROJECT_DIR_PLACEHOLDER, WORKSPACE_FOLDER_PLACEHOLDER);
    match cwd.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => cwd,
    }
}

/// Split program parameters on single spaces.
///
/// There is no quoting support. Empty tokens between consecutive spaces are kept, trailing
/// empty tokens are dropped, and a value without any space is returned as one token (so
/// `""` becomes `[""]`).
pub fn split_program_parameters(value: &str) -> Vec<String> {
    let mut tokens: Vec<&str> = value.split(' ').collect();
    if tokens.len() > 1 {
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
    }
    tokens.into_iter().map(str::to_string).collect()
}
