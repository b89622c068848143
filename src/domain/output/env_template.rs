use crate::domain::manifest::EnvVarSpec;

const HEADER: &str = "# Environment variables for this project.\n# Copy to .env.local and fill in the values.\n";

/// `.env.example` body: an annotated, empty assignment per variable.
pub fn render_env_template(env: &[EnvVarSpec]) -> String {
    if env.is_empty() {
        return format!("{HEADER}# No environment variables are required.\n");
    }

    let mut out = String::from(HEADER);
    for spec in env {
        out.push('\n');
        let mut annotation =
            if spec.description.is_empty() { spec.name.clone() } else { spec.description.clone() };
        annotation.push_str(if spec.required { " (required)" } else { " (optional)" });
        if spec.public {
            annotation.push_str(", public");
        }
        out.push_str(&format!("# {annotation}\n"));
        if let Some(example) = &spec.example {
            out.push_str(&format!("# Example: {example}\n"));
        }
        out.push_str(&format!("{}=\n", spec.name));
    }
    out
}
