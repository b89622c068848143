//! Section catalog and the section-stub generator.

use std::collections::BTreeSet;

use crate::domain::analysis::{SectionType, SiteStructure};
use crate::domain::project::GeneratedFile;

/// Component shipped by the base template for unrecognised sections.
pub const PLACEHOLDER_COMPONENT: SectionComponent = SectionComponent {
    name: "PlaceholderSection",
    module: "placeholder-section",
};

/// Canonical component for a section type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionComponent {
    pub name: &'static str,
    /// File stem under `components/sections/`.
    pub module: &'static str,
}

impl SectionComponent {
    pub fn import_path(&self) -> String {
        format!("@/components/sections/{}", self.module)
    }

    pub fn file_path(&self) -> String {
        format!("components/sections/{}.tsx", self.module)
    }
}

/// Fixed lookup from section type to component. `Unknown` maps to the placeholder.
pub fn component_for(section: SectionType) -> SectionComponent {
    let (name, module) = match section {
        SectionType::Hero => ("HeroSection", "hero-section"),
        SectionType::Features => ("FeaturesSection", "features-section"),
        SectionType::Pricing => ("PricingSection", "pricing-section"),
        SectionType::Testimonials => ("TestimonialsSection", "testimonials-section"),
        SectionType::Cta => ("CtaSection", "cta-section"),
        SectionType::Faq => ("FaqSection", "faq-section"),
        SectionType::About => ("AboutSection", "about-section"),
        SectionType::Team => ("TeamSection", "team-section"),
        SectionType::Contact => ("ContactSection", "contact-section"),
        SectionType::Gallery => ("GallerySection", "gallery-section"),
        SectionType::Blog => ("BlogSection", "blog-section"),
        SectionType::Stats => ("StatsSection", "stats-section"),
        SectionType::Logos => ("LogosSection", "logos-section"),
        SectionType::Comparison => ("ComparisonSection", "comparison-section"),
        SectionType::Timeline => ("TimelineSection", "timeline-section"),
        SectionType::Process => ("ProcessSection", "process-section"),
        SectionType::Newsletter => ("NewsletterSection", "newsletter-section"),
        SectionType::Footer => ("FooterSection", "footer-section"),
        SectionType::Unknown => return PLACEHOLDER_COMPONENT,
    };
    SectionComponent { name, module }
}

/// Distinct stub-worthy section types across all pages, in type order.
pub fn distinct_section_types(structure: &SiteStructure) -> BTreeSet<SectionType> {
    structure
        .pages
        .iter()
        .flat_map(|page| page.sections.iter().map(|section| section.section_type))
        .filter(|section| !matches!(section, SectionType::Unknown | SectionType::Footer))
        .collect()
}

/// One illustrative stub per distinct section type. Never replaces an existing component.
pub fn generate_section_stubs(structure: &SiteStructure) -> Vec<GeneratedFile> {
    distinct_section_types(structure)
        .into_iter()
        .map(|section| {
            let component = component_for(section);
            GeneratedFile::preserving(component.file_path(), render_stub(section, component))
        })
        .collect()
}

fn render_stub(section: SectionType, component: SectionComponent) -> String {
    let (heading, body) = stub_body(section);
    SECTION_STUB_TEMPLATE
        .replace("__COMPONENT__", component.name)
        .replace("__SECTION__", section.as_str())
        .replace("__HEADING__", heading)
        .replace("__BODY__", body)
}

const SECTION_STUB_TEMPLATE: &str = r##"type __COMPONENT__Props = {
  title?: string;
  description?: string;
};

export function __COMPONENT__({ title = "__HEADING__", description }: __COMPONENT__Props) {
  return (
    <section data-section="__SECTION__" className="mx-auto max-w-6xl px-6 py-16">
      <h2 className="text-3xl font-semibold tracking-tight">{title}</h2>
      {description ? <p className="mt-4 text-muted-foreground">{description}</p> : null}
__BODY__
    </section>
  );
}
"##;

fn stub_body(section: SectionType) -> (&'static str, &'static str) {
    match section {
        SectionType::Hero => (
            "Build something people love",
            r##"      <div className="mt-8 flex gap-4">
        <a href="#" className="rounded-button bg-primary px-6 py-3 text-primary-foreground">Get started</a>
        <a href="#" className="rounded-button border border-border px-6 py-3">Learn more</a>
      </div>"##,
        ),
        SectionType::Features => (
            "Features",
            r##"      <div className="mt-10 grid gap-6 md:grid-cols-3">
        {["Fast", "Reliable", "Secure"].map((feature) => (
          <div key={feature} className="rounded-card border border-border p-6 shadow-card">
            <h3 className="font-medium">{feature}</h3>
          </div>
        ))}
      </div>"##,
        ),
        SectionType::Pricing => (
            "Pricing",
            r##"      <div className="mt-10 grid gap-6 md:grid-cols-3">
        {["Starter", "Pro", "Enterprise"].map((tier) => (
          <div key={tier} className="rounded-card border border-border p-6 shadow-card">
            <h3 className="font-medium">{tier}</h3>
            <button className="mt-6 w-full bg-primary py-2 text-primary-foreground">Choose {tier}</button>
          </div>
        ))}
      </div>"##,
        ),
        SectionType::Testimonials => (
            "What our customers say",
            r##"      <blockquote className="mt-8 rounded-card border border-border p-6 italic">
        "Replace this with a real testimonial."
      </blockquote>"##,
        ),
        SectionType::Cta => (
            "Ready to get started?",
            r##"      <a href="#" className="mt-8 inline-block rounded-button bg-primary px-6 py-3 text-primary-foreground">Start now</a>"##,
        ),
        SectionType::Faq => (
            "Frequently asked questions",
            r##"      <div className="mt-8 space-y-4">
        {[{ q: "Question?", a: "Answer." }].map((item) => (
          <details key={item.q} className="rounded-card border border-border p-4">
            <summary className="font-medium">{item.q}</summary>
            <p className="mt-2 text-muted-foreground">{item.a}</p>
          </details>
        ))}
      </div>"##,
        ),
        SectionType::About => (
            "About us",
            r##"      <p className="mt-6 max-w-3xl text-muted-foreground">Tell your story here.</p>"##,
        ),
        SectionType::Team => (
            "Meet the team",
            r##"      <ul className="mt-10 grid gap-6 md:grid-cols-4">
        {["Name Surname"].map((member) => (
          <li key={member} className="rounded-card border border-border p-6 text-center">{member}</li>
        ))}
      </ul>"##,
        ),
        SectionType::Contact => (
            "Get in touch",
            r##"      <form className="mt-8 grid max-w-xl gap-4">
        <input name="email" type="email" placeholder="you@example.com" className="border border-border px-4 py-2" />
        <textarea name="message" rows={4} className="border border-border px-4 py-2" />
        <button type="submit" className="bg-primary py-2 text-primary-foreground">Send</button>
      </form>"##,
        ),
        SectionType::Gallery => (
            "Gallery",
            r##"      <div className="mt-10 grid grid-cols-2 gap-4 md:grid-cols-4">
        {Array.from({ length: 8 }).map((_, index) => (
          <div key={index} className="aspect-square rounded-card bg-muted" />
        ))}
      </div>"##,
        ),
        SectionType::Blog => (
            "Latest posts",
            r##"      <div className="mt-10 grid gap-6 md:grid-cols-3">
        {["First post"].map((post) => (
          <article key={post} className="rounded-card border border-border p-6">{post}</article>
        ))}
      </div>"##,
        ),
        SectionType::Stats => (
            "By the numbers",
            r##"      <dl className="mt-10 grid gap-6 md:grid-cols-3">
        {[{ label: "Customers", value: "10k+" }].map((stat) => (
          <div key={stat.label}>
            <dt className="text-muted-foreground">{stat.label}</dt>
            <dd className="text-4xl font-semibold">{stat.value}</dd>
          </div>
        ))}
      </dl>"##,
        ),
        SectionType::Logos => (
            "Trusted by",
            r##"      <div className="mt-8 flex flex-wrap items-center gap-8 opacity-70">
        {["Logo"].map((logo) => (
          <span key={logo} className="text-lg font-semibold">{logo}</span>
        ))}
      </div>"##,
        ),
        SectionType::Comparison => (
            "How we compare",
            r##"      <table className="mt-8 w-full border border-border text-left">
        <tbody>
          <tr><th className="p-3">Feature</th><td className="p-3">Us</td><td className="p-3">Them</td></tr>
        </tbody>
      </table>"##,
        ),
        SectionType::Timeline => (
            "Our journey",
            r##"      <ol className="mt-8 border-l border-border pl-6">
        <li className="mb-6">Milestone</li>
      </ol>"##,
        ),
        SectionType::Process => (
            "How it works",
            r##"      <ol className="mt-10 grid gap-6 md:grid-cols-3">
        {["Sign up", "Configure", "Launch"].map((step, index) => (
          <li key={step} className="rounded-card border border-border p-6">
            <span className="text-primary">{index + 1}</span> {step}
          </li>
        ))}
      </ol>"##,
        ),
        SectionType::Newsletter => (
            "Stay in the loop",
            r##"      <form className="mt-8 flex max-w-md gap-2">
        <input name="email" type="email" placeholder="you@example.com" className="flex-1 border border-border px-4 py-2" />
        <button type="submit" className="rounded-button bg-primary px-4 py-2 text-primary-foreground">Subscribe</button>
      </form>"##,
        ),
        SectionType::Footer | SectionType::Unknown => ("Section", ""),
    }
}
