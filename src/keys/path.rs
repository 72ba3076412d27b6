use std::path::Path;

use super::generator::camel_case_component;

/// Folder names that always contribute a namespace segment.
pub const STRUCTURAL_DIRECTORIES: &[&str] = &[
    "components",
    "pages",
    "views",
    "containers",
    "layouts",
    "sections",
];

/// Build the namespace segments for a key generated inside `file`.
///
/// The path is taken relative to `root` when it lives under it. Directory
/// components containing a dot are skipped unless they are structural, and
/// components listed in `ignored` are skipped entirely. The file stem becomes
/// the last segment. Repeated segments are removed, first occurrence wins.
///
/// ```
/// use std::path::Path;
/// use transkey::keys::namespace_for;
///
/// let segments = namespace_for(
///     Path::new("/repo/Components/Pages/Public/Dashboard/DashboardMain.razor"),
///     Some(Path::new("/repo")),
///     &[],
/// );
/// assert_eq!(segments, ["components", "pages", "public", "dashboard", "dashboardMain"]);
/// ```
pub fn namespace_for(file: &Path, root: Option<&Path>, ignored: &[String]) -> Vec<String> {
    let normalized = normalize_separators(file);
    let relative = match root {
        Some(root) => {
            let root = normalize_separators(root);
            let prefix = format!("{}/", root.trim_end_matches('/'));
            normalized
                .strip_prefix(&prefix)
                .map(str::to_string)
                .unwrap_or(normalized)
        }
        None => normalized,
    };

    let components: Vec<&str> = relative
        .split('/')
        .filter(|c| !c.is_empty() && *c != "." && *c != "..")
        .collect();

    let Some((file_name, directories)) = components.split_last() else {
        return Vec::new();
    };

    let mut segments: Vec<String> = directories
        .iter()
        .filter(|dir| is_structural(dir) || !dir.contains('.'))
        .filter(|dir| !ignored.iter().any(|i| i.eq_ignore_ascii_case(dir)))
        .map(|dir| camel_case_component(dir))
        .collect();

    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    segments.push(camel_case_component(&stem));

    let mut unique: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        if !segment.is_empty() && !unique.contains(&segment) {
            unique.push(segment);
        }
    }
    unique
}

fn is_structural(component: &str) -> bool {
    STRUCTURAL_DIRECTORIES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(component))
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
