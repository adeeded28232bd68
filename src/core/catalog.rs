//! core::catalog
//!
//! The table of installable tools.
//!
//! # Design
//!
//! The catalog is a static table: there is no remote registry to query, and
//! the set of tools changes only with a release. Order matters. `install
//! --all` walks the table top to bottom, and every `requires` entry names a
//! tool that appears earlier, so prerequisites are always installed first.

/// One installable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Catalog name, as typed on the command line.
    pub name: &'static str,

    /// Binary probed on PATH to decide whether the tool is present.
    pub binary: &'static str,

    /// Install script file name, relative to the scripts directory.
    pub script: &'static str,

    /// One-line description for `list` output.
    pub summary: &'static str,

    /// Catalog names this tool expects to be installed already.
    pub requires: &'static [&'static str],
}

/// Installable tools, in install order.
pub const CATALOG: &[ToolSpec] = &[
    ToolSpec {
        name: "asdf",
        binary: "asdf",
        script: "install_asdf.sh",
        summary: "Runtime version manager used to pin tool versions",
        requires: &[],
    },
    ToolSpec {
        name: "scarb",
        binary: "scarb",
        script: "install_scarb.sh",
        summary: "Cairo package manager and build tool",
        requires: &["asdf"],
    },
    ToolSpec {
        name: "starknet-foundry",
        binary: "snforge",
        script: "install_starknet_foundry.sh",
        summary: "Testing and deployment toolchain (snforge, sncast)",
        requires: &["asdf"],
    },
    ToolSpec {
        name: "starkli",
        binary: "starkli",
        script: "install_starkli.sh",
        summary: "Command-line interface for interacting with Starknet",
        requires: &[],
    },
    ToolSpec {
        name: "dojo",
        binary: "sozo",
        script: "install_dojo.sh",
        summary: "Toolchain for building provable games and autonomous worlds",
        requires: &[],
    },
];

/// Look up a tool by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    CATALOG
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// All catalog names, in install order.
pub fn names() -> Vec<&'static str> {
    CATALOG.iter().map(|spec| spec.name).collect()
}
