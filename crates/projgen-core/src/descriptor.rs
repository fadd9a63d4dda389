//! Per-module project descriptor (`<module>.csproj`).

use std::collections::HashSet;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::Result;
use crate::filter::FilterPolicy;
use crate::identifier::ModuleId;
use crate::model::{Module, Snapshot};

/// Extension of descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "csproj";

/// The single namespace declared by every descriptor.
pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Runtime pinned for every module of the graph.
pub const TARGET_FRAMEWORK_VERSION: &str = "v4.7.1";

const TOOLS_VERSION: &str = "4.0";
const LANG_VERSION: &str = "latest";
const CSHARP_TARGETS: &str = r"$(MSBuildToolsPath)\Microsoft.CSharp.targets";

type XmlWriter = Writer<Vec<u8>>;

/// File name of the descriptor for a module called `module_name`.
pub fn descriptor_file_name(module_name: &str) -> String {
    format!("{}.{}", module_name, DESCRIPTOR_EXTENSION)
}

/// A module prepared for rendering.
#[derive(Debug)]
pub struct Descriptor<'a> {
    pub module: &'a Module,
    pub id: ModuleId,
    /// Referenced modules that pass the filter, in declaration order
    pub references: Vec<&'a Module>,
}

impl<'a> Descriptor<'a> {
    /// Resolve `module`'s references against `snapshot`, keeping only those
    /// the policy includes.
    ///
    /// Unknown names, self references and repeats are dropped, so a cyclic or
    /// malformed graph still yields a finite reference list.
    pub fn new(module: &'a Module, snapshot: &Snapshot<'a>, policy: &FilterPolicy<'_>) -> Self {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(module.name.as_str());

        let mut references = Vec::new();
        for name in &module.module_references {
            if !visited.insert(name.as_str()) {
                tracing::debug!(module = %module.name, reference = %name, "skipping repeated reference");
                continue;
            }
            match snapshot.get(name) {
                Some(target) if policy.include(target) => references.push(target),
                Some(_) => {
                    tracing::debug!(module = %module.name, reference = %name, "dropping excluded reference");
                }
                None => {
                    tracing::debug!(module = %module.name, reference = %name, "dropping unknown reference");
                }
            }
        }

        Self {
            module,
            id: ModuleId::derive(&module.name),
            references,
        }
    }

    pub fn file_name(&self) -> String {
        descriptor_file_name(&self.module.name)
    }

    /// Render the complete XML document.
    pub fn render(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        open(
            &mut writer,
            "Project",
            &[
                ("ToolsVersion", TOOLS_VERSION),
                ("DefaultTargets", "Build"),
                ("xmlns", MSBUILD_NAMESPACE),
            ],
        )?;

        self.write_identity(&mut writer)?;
        self.write_compiled_references(&mut writer)?;
        self.write_sources(&mut writer)?;
        self.write_module_references(&mut writer)?;

        empty(&mut writer, "Import", &[("Project", CSHARP_TARGETS)])?;
        close(&mut writer, "Project")?;

        let mut xml = String::from_utf8(writer.into_inner())?;
        xml.push('\n');
        Ok(xml)
    }

    fn write_identity(&self, writer: &mut XmlWriter) -> Result<()> {
        let guid = self.id.braced();
        open(writer, "PropertyGroup", &[])?;
        text_element(writer, "LangVersion", LANG_VERSION)?;
        text_element(writer, "ProjectGuid", &guid)?;
        text_element(writer, "OutputType", "Library")?;
        text_element(writer, "AssemblyName", &self.module.name)?;
        text_element(writer, "TargetFrameworkVersion", TARGET_FRAMEWORK_VERSION)?;
        text_element(writer, "FileAlignment", "512")?;
        text_element(writer, "BaseDirectory", ".")?;
        close(writer, "PropertyGroup")
    }

    fn write_compiled_references(&self, writer: &mut XmlWriter) -> Result<()> {
        open(writer, "ItemGroup", &[])?;
        for reference in &self.module.compiled_references {
            let display = reference.file_stem().unwrap_or(reference.as_str());
            open(writer, "Reference", &[("Include", display)])?;
            text_element(writer, "HintPath", reference.as_str())?;
            close(writer, "Reference")?;
        }
        close(writer, "ItemGroup")
    }

    fn write_sources(&self, writer: &mut XmlWriter) -> Result<()> {
        open(writer, "ItemGroup", &[])?;
        for source in &self.module.source_files {
            empty(writer, "Compile", &[("Include", source.as_str())])?;
        }
        close(writer, "ItemGroup")
    }

    fn write_module_references(&self, writer: &mut XmlWriter) -> Result<()> {
        open(writer, "ItemGroup", &[])?;
        for target in &self.references {
            let file_name = descriptor_file_name(&target.name);
            let guid = ModuleId::derive(&target.name).braced();
            open(writer, "ProjectReference", &[("Include", file_name.as_str())])?;
            text_element(writer, "Project", &guid)?;
            text_element(writer, "Name", &target.name)?;
            close(writer, "ProjectReference")?;
        }
        close(writer, "ItemGroup")
    }
}

/// Render the descriptor of `module`.
pub fn serialize<'a>(
    module: &'a Module,
    snapshot: &Snapshot<'a>,
    policy: &FilterPolicy<'_>,
) -> Result<String> {
    Descriptor::new(module, snapshot, policy).render()
}

fn start<'n>(name: &'n str, attributes: &[(&'n str, &'n str)]) -> BytesStart<'n> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    element
}

fn open(writer: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Start(start(name, attributes)))?;
    Ok(())
}

fn close(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn empty(writer: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Empty(start(name, attributes)))?;
    Ok(())
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    open(writer, name, &[])?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    close(writer, name)
}
