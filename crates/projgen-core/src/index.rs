//! Workspace index (`<root>.sln`).

use projgen_fs::NormalizedPath;

use crate::descriptor::descriptor_file_name;
use crate::error::{Error, Result};
use crate::filter::FilterPolicy;
use crate::identifier::ModuleId;
use crate::model::Module;

/// Extension of the index file.
pub const INDEX_EXTENSION: &str = "sln";

/// The two build configurations every module is mapped to.
pub const CONFIGURATIONS: [&str; 2] = ["Debug|Any CPU", "Release|Any CPU"];

const HEADER: &str = "Microsoft Visual Studio Solution File, Format Version 12.00";
const FORMAT_VERSION: &str = "# Visual Studio 15";
const CSHARP_PROJECT_TYPE: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";
const NEWLINE: &str = "\r\n";

/// File name of the index for the workspace at `root`.
pub fn index_file_name(root: &NormalizedPath) -> Result<String> {
    root.file_name()
        .map(|name| format!("{}.{}", name, INDEX_EXTENSION))
        .ok_or_else(|| Error::InvalidRoot {
            path: root.to_string(),
        })
}

/// One registered module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub descriptor_file: String,
    pub id: ModuleId,
}

impl IndexEntry {
    fn for_module(module: &Module) -> Self {
        Self {
            name: module.name.clone(),
            descriptor_file: descriptor_file_name(&module.name),
            id: ModuleId::derive(&module.name),
        }
    }
}

/// The modules registered in the index, in host order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new(modules: &[Module], policy: &FilterPolicy<'_>) -> Self {
        Self {
            entries: policy
                .included(modules)
                .into_iter()
                .map(IndexEntry::for_module)
                .collect(),
        }
    }

    /// Render the index with CRLF line endings.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut line = |text: &str| {
            out.push_str(text);
            out.push_str(NEWLINE);
        };

        line(HEADER);
        line(FORMAT_VERSION);

        for entry in &self.entries {
            line(&format!(
                "Project(\"{}\") = \"{}\", \"{}\", \"{}\"",
                CSHARP_PROJECT_TYPE,
                entry.name,
                entry.descriptor_file,
                entry.id.braced()
            ));
            line("EndProject");
        }

        line("Global");
        line("\tGlobalSection(SolutionConfigurationPlatforms) = preSolution");
        for configuration in CONFIGURATIONS {
            line(&format!("\t\t{0} = {0}", configuration));
        }
        line("\tEndGlobalSection");
        line("\tGlobalSection(ProjectConfigurationPlatforms) = postSolution");
        for entry in &self.entries {
            let guid = entry.id.braced();
            for configuration in CONFIGURATIONS {
                line(&format!("\t\t{}.{1}.ActiveCfg = {1}", guid, configuration));
                line(&format!("\t\t{}.{1}.Build.0 = {1}", guid, configuration));
            }
        }
        line("\tEndGlobalSection");
        line("EndGlobal");

        out
    }
}

/// Render the index for `modules`.
pub fn serialize(modules: &[Module], policy: &FilterPolicy<'_>) -> String {
    Index::new(modules, policy).render()
}
