//! Pages, navigation, footer, and root layout derived from the analysed site structure.

use std::collections::BTreeMap;

use crate::domain::analysis::{NavItem, PageStructure, SectionType, SiteStructure};
use crate::domain::generators::naming::{js_string, pascal_case, slugify};
use crate::domain::generators::sections::component_for;
use crate::domain::project::GeneratedFile;

pub const HEADER_PATH: &str = "components/layout/site-header.tsx";
pub const FOOTER_PATH: &str = "components/layout/site-footer.tsx";
pub const LAYOUT_PATH: &str = "app/layout.tsx";

/// Emit one file per page plus header, footer, and root layout. All replace template defaults.
///
/// When several pages resolve to the same file, the first one is kept.
pub fn generate_structure(structure: &SiteStructure, dark_mode: bool) -> Vec<GeneratedFile> {
    let mut files: Vec<GeneratedFile> = Vec::new();
    for page in &structure.pages {
        let path = page_file_path(page);
        if files.iter().any(|file| file.path == path) {
            continue;
        }
        files.push(GeneratedFile::replacing(path, render_page(page)));
    }

    let navigation = navigation_items(structure);
    files.push(GeneratedFile::replacing(HEADER_PATH, render_header(&navigation)));
    files.push(GeneratedFile::replacing(FOOTER_PATH, render_footer(structure, &navigation)));
    files.push(GeneratedFile::replacing(LAYOUT_PATH, render_layout(dark_mode)));
    files
}

/// One warning per page whose file is already claimed by an earlier page.
pub fn route_collisions(structure: &SiteStructure) -> Vec<String> {
    let mut claimed: BTreeMap<String, &str> = BTreeMap::new();
    let mut warnings = Vec::new();
    for page in &structure.pages {
        let path = page_file_path(page);
        match claimed.get(&path) {
            Some(first) => warnings.push(format!(
                "Pages '{}' and '{}' both map to {}; keeping '{}'",
                first, page.name, path, first
            )),
            None => {
                claimed.insert(path, &page.name);
            }
        }
    }
    warnings
}

/// Route of a page, falling back to its slugified name.
///
/// Explicit paths are slugified segment by segment; segments that slugify to
/// nothing (including `.` and `..`) are dropped.
pub fn page_route(page: &PageStructure) -> String {
    match page.path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => {
            let segments: Vec<String> =
                path.split('/').map(slugify).filter(|s| !s.is_empty()).collect();
            format!("/{}", segments.join("/"))
        }
        _ => {
            let slug = slugify(&page.name);
            if slug.is_empty() || slug == "home" || slug == "index" {
                "/".to_string()
            } else {
                format!("/{slug}")
            }
        }
    }
}

/// `/` -> `app/page.tsx`, `/about/team` -> `app/about/team/page.tsx`.
pub fn page_file_path(page: &PageStructure) -> String {
    let route = page_route(page);
    let trimmed = route.trim_start_matches('/');
    if trimmed.is_empty() {
        "app/page.tsx".to_string()
    } else {
        format!("app/{trimmed}/page.tsx")
    }
}

fn render_page(page: &PageStructure) -> String {
    let sections: Vec<_> = page
        .ordered_sections()
        .into_iter()
        .filter(|section| section.section_type != SectionType::Footer)
        .collect();

    let mut imports: Vec<String> = Vec::new();
    let mut body = String::new();
    for section in &sections {
        let component = component_for(section.section_type);
        let import = format!(
            "import {{ {} }} from \"{}\";",
            component.name,
            component.import_path()
        );
        if !imports.contains(&import) {
            imports.push(import);
        }

        let mut props = String::new();
        if let Some(title) = &section.title {
            props.push_str(&format!(" title={{{}}}", js_string(title)));
        }
        if let Some(description) = &section.description {
            props.push_str(&format!(" description={{{}}}", js_string(description)));
        }
        body.push_str(&format!("      <{}{} />\n", component.name, props));
    }

    let name = pascal_case(&page.name);
    let component_name = if name.is_empty() { "Page".to_string() } else { format!("{name}Page") };

    let mut out = String::new();
    if !imports.is_empty() {
        out.push_str(&imports.join("\n"));
        out.push_str("\n\n");
    }
    out.push_str(&format!("export default function {component_name}() {{\n  return (\n"));
    if body.is_empty() {
        out.push_str("    <></>\n");
    } else {
        out.push_str("    <>\n");
        out.push_str(&body);
        out.push_str("    </>\n");
    }
    out.push_str("  );\n}\n");
    out
}

fn navigation_items(structure: &SiteStructure) -> Vec<NavItem> {
    if !structure.navigation.is_empty() {
        return structure.navigation.clone();
    }
    structure
        .pages
        .iter()
        .map(|page| NavItem::new(&page.name, &page_route(page)))
        .collect()
}

fn render_nav_links(items: &[NavItem], indent: &str) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{indent}<li>\n{indent}  <Link href={{{}}} className=\"hover:text-primary\">{}</Link>\n",
            js_string(&item.href),
            jsx_text(&item.label)
        ));
        if !item.children.is_empty() {
            out.push_str(&format!("{indent}  <ul className=\"ml-4 space-y-1 text-sm\">\n"));
            out.push_str(&render_nav_links(&item.children, &format!("{indent}    ")));
            out.push_str(&format!("{indent}  </ul>\n"));
        }
        out.push_str(&format!("{indent}</li>\n"));
    }
    out
}

fn render_header(navigation: &[NavItem]) -> String {
    HEADER_TEMPLATE.replace("__LINKS__", render_nav_links(navigation, "          ").trim_end())
}

const HEADER_TEMPLATE: &str = r#"import Link from "next/link";

export function SiteHeader() {
  return (
    <header className="border-b border-border bg-background">
      <nav className="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
        <Link href="/" className="font-heading text-lg font-semibold">
          {{projectName}}
        </Link>
        <ul className="flex items-center gap-6">
__LINKS__
        </ul>
      </nav>
    </header>
  );
}
"#;

fn render_footer(structure: &SiteStructure, navigation: &[NavItem]) -> String {
    let footer = structure.footer.as_ref();
    let copyright = footer
        .and_then(|layout| layout.copyright.clone())
        .map(|text| jsx_text(&text))
        .unwrap_or_else(|| "&copy; {new Date().getFullYear()} {{projectName}}".to_string());

    let mut columns = String::new();
    match footer.filter(|layout| !layout.columns.is_empty()) {
        Some(layout) => {
            for column in &layout.columns {
                columns.push_str(&render_footer_column(&column.title, &column.links));
            }
        }
        None if !navigation.is_empty() => {
            columns.push_str(&render_footer_column("Navigation", navigation));
        }
        None => {}
    }

    let grid = if columns.is_empty() {
        String::new()
    } else {
        format!(
            "        <div className=\"grid gap-8 md:grid-cols-4\">\n{}        </div>\n",
            columns
        )
    };

    FOOTER_TEMPLATE.replace("__COLUMNS__\n", &grid).replace("__COPYRIGHT__", &copyright)
}

fn render_footer_column(title: &str, links: &[NavItem]) -> String {
    let flat: Vec<NavItem> =
        links.iter().map(|link| NavItem::new(&link.label, &link.href)).collect();
    format!(
        "          <div>\n            <h3 className=\"font-medium\">{}</h3>\n            <ul className=\"mt-3 space-y-2 text-sm text-muted-foreground\">\n{}            </ul>\n          </div>\n",
        jsx_text(title),
        render_nav_links(&flat, "              ")
    )
}

const FOOTER_TEMPLATE: &str = r#"import Link from "next/link";

export function SiteFooter() {
  return (
    <footer className="border-t border-border bg-background">
      <div className="mx-auto max-w-6xl px-6 py-12">
__COLUMNS__
        <p className="mt-8 text-sm text-muted-foreground">__COPYRIGHT__</p>
      </div>
    </footer>
  );
}
"#;

fn render_layout(dark_mode: bool) -> String {
    let html_class = if dark_mode { " className=\"dark\"" } else { "" };
    LAYOUT_TEMPLATE.replace("__HTML_CLASS__", html_class)
}

const LAYOUT_TEMPLATE: &str = r#"import type { Metadata } from "next";
import "./globals.css";
import { SiteFooter } from "@/components/layout/site-footer";
import { SiteHeader } from "@/components/layout/site-header";

export const metadata: Metadata = {
  title: "{{projectName}}",
};

export default function RootLayout({ children }: { children: React.ReactNode }) {
  return (
    <html lang="en"__HTML_CLASS__>
      <body className="flex min-h-screen flex-col bg-background font-body text-foreground">
        <SiteHeader />
        <main className="flex-1">{children}</main>
        <SiteFooter />
      </body>
    </html>
  );
}
"#;

/// Escape text placed between JSX tags.
fn jsx_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}
