use crate::models::{IndexReport, PackageInfo};
use crate::utils::truncate_chars;

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_BUILD_SYSTEM: &str = "N/A";

const CATEGORY_DESCRIPTION_CHARS: usize = 80;
const ALPHABETICAL_DESCRIPTION_CHARS: usize = 60;

fn description_or_placeholder(pkg: &PackageInfo, max_chars: usize) -> &str {
    truncate_chars(pkg.description.as_deref().unwrap_or(NO_DESCRIPTION), max_chars)
}

fn push_category_line(out: &mut String, pkg: &PackageInfo) {
    out.push_str(&format!(
        "- **{}** - {}\n",
        pkg.name,
        description_or_placeholder(pkg, CATEGORY_DESCRIPTION_CHARS)
    ));
}

/// Render the markdown-flavoured package listing
///
/// `generated` is printed verbatim on the `Generated:` line so callers control
/// the timestamp. The LuaRocks section header carries the full rockspec count,
/// while its body skips packages already listed under CMake.
pub fn format_text_report(report: &IndexReport, title: &str, generated: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n", title));
    out.push_str(&format!("\nTotal Packages: {}\n\n", report.total_count));
    out.push_str(&format!("Generated: {}\n\n", generated));

    out.push_str("## Packages by Category\n\n");

    out.push_str(&format!("### CMake-based Packages ({})\n\n", report.cmake_count));
    for pkg in report.cmake_packages() {
        push_category_line(&mut out, pkg);
    }

    out.push_str(&format!("\n### LuaRocks Packages ({})\n\n", report.luarocks_count));
    for pkg in report.luarocks_only_packages() {
        push_category_line(&mut out, pkg);
    }

    out.push_str("\n## All Packages (Alphabetical)\n\n");
    for pkg in &report.packages {
        let build_systems = pkg.build_systems();
        let build_str = if build_systems.is_empty() {
            NO_BUILD_SYSTEM.to_string()
        } else {
            build_systems.join(", ")
        };
        out.push_str(&format!(
            "- **{}** [{}] - {}\n",
            pkg.name,
            build_str,
            description_or_placeholder(pkg, ALPHABETICAL_DESCRIPTION_CHARS)
        ));
    }

    out
}
