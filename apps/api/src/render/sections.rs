//! Per-section fragment builders. Each returns `None` when its section has
//! nothing to show, which drops the section from the document.

use crate::form::dates::{date_range, YearMonth};
use crate::form::entries::{Certification, Education, Experience, Project, RepeatableGroup};
use crate::form::fields::FieldId;
use crate::form::section_order::SectionId;
use crate::form::tags::TagCollection;
use crate::form::FormState;
use crate::render::html::{ensure_http, escape_html};

fn icon(section: SectionId) -> &'static str {
    match section {
        SectionId::Objective => "fa-bullseye",
        SectionId::Experience => "fa-briefcase",
        SectionId::Education => "fa-graduation-cap",
        SectionId::Skills => "fa-cogs",
        SectionId::Projects => "fa-project-diagram",
        SectionId::Certifications => "fa-certificate",
        SectionId::Languages => "fa-language",
        SectionId::Hobbies => "fa-heart",
        SectionId::Declaration => "fa-file-signature",
    }
}

fn wrap(section: SectionId, body: &str) -> String {
    format!(
        r#"<div class="resume-section" data-section="{id}"><h2 class="resume-section-title"><i class="fas {icon}"></i> {label}</h2>{body}</div>"#,
        id = section.as_str(),
        icon = icon(section),
        label = section.label(),
    )
}

fn bullet_list(items: &[String]) -> String {
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(r#"<ul class="bullet-list">{lis}</ul>"#)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn render_section(form: &FormState, section: SectionId, now: YearMonth) -> Option<String> {
    let body = match section {
        SectionId::Objective => objective(form)?,
        SectionId::Experience => experience(&form.experience, now)?,
        SectionId::Education => education(&form.education)?,
        SectionId::Skills => skills(form)?,
        SectionId::Projects => projects(&form.projects)?,
        SectionId::Certifications => certifications(&form.certifications)?,
        SectionId::Languages => tag_list(&form.languages)?,
        SectionId::Hobbies => tag_list(&form.hobbies)?,
        SectionId::Declaration => declaration(form)?,
    };
    Some(wrap(section, &body))
}

fn objective(form: &FormState) -> Option<String> {
    let text = form.fields.trimmed(FieldId::Objective);
    (!text.is_empty()).then(|| format!(r#"<p class="resume-objective">{}</p>"#, escape_html(text)))
}

fn declaration(form: &FormState) -> Option<String> {
    let text = form.fields.trimmed(FieldId::Declaration);
    (!text.is_empty()).then(|| format!("<p>{}</p>", escape_html(text)))
}

fn tag_list(tags: &TagCollection) -> Option<String> {
    (!tags.is_empty()).then(|| bullet_list(tags.items()))
}

fn skills(form: &FormState) -> Option<String> {
    if form.skills.is_empty() {
        return None;
    }
    let columns: String = [
        ("Personal Skills", &form.skills.personal),
        ("Professional Skills", &form.skills.professional),
        ("Technical Skills", &form.skills.technical),
    ]
    .iter()
    .map(|(title, tags)| {
        format!(
            r#"<div class="skills-col"><div class="skills-col-title">{title}</div>{}</div>"#,
            bullet_list(tags.items())
        )
    })
    .collect();
    Some(format!(r#"<div class="skills-grid">{columns}</div>"#))
}

/// Concatenates the items of the renderable entries; `None` when there are none.
fn items(rendered: impl Iterator<Item = String>) -> Option<String> {
    let html: String = rendered.collect();
    (!html.is_empty()).then_some(html)
}

fn item(title: &str, subtitle: Option<&str>, aside: &str, description: &str) -> String {
    let subtitle = subtitle
        .filter(|s| !s.is_empty())
        .map(|s| format!(r#"<div class="resume-item-subtitle">{}</div>"#, escape_html(s)))
        .unwrap_or_default();
    let description = if description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="resume-item-description">{}</p>"#,
            escape_html(description)
        )
    };
    format!(
        r#"<div class="resume-item"><div class="resume-item-header"><div><div class="resume-item-title">{}</div>{subtitle}</div>{aside}</div>{description}</div>"#,
        escape_html(title)
    )
}

fn aside(date: Option<String>, detail: Option<String>) -> String {
    let date = date
        .map(|d| format!(r#"<span class="resume-item-date">{d}</span>"#))
        .unwrap_or_default();
    let detail = detail
        .map(|d| format!(r#"<div class="resume-item-duration">{d}</div>"#))
        .unwrap_or_default();
    format!("<div>{date}{detail}</div>")
}

fn experience(group: &RepeatableGroup<Experience>, now: YearMonth) -> Option<String> {
    items(group.renderable().map(|entry| {
        let exp = &entry.record;
        let range = date_range(&exp.start, &exp.end, exp.current);
        let duration = exp.tenure(now).map(|t| t.compact_text());
        item(
            or_placeholder(exp.title.trim(), "Position"),
            Some(or_placeholder(exp.company.trim(), "Company")),
            &aside(range.as_deref().map(escape_html), duration.as_deref().map(escape_html)),
            exp.description.trim(),
        )
    }))
}

fn education(group: &RepeatableGroup<Education>) -> Option<String> {
    items(group.renderable().map(|entry| {
        let edu = &entry.record;
        let year = edu.year.trim();
        let grade = edu.grade.trim();
        item(
            or_placeholder(edu.degree.trim(), "Degree"),
            Some(or_placeholder(edu.institution.trim(), "Institution")),
            &aside(
                (!year.is_empty()).then(|| escape_html(year)),
                (!grade.is_empty()).then(|| format!("Grade: {}", escape_html(grade))),
            ),
            "",
        )
    }))
}

fn projects(group: &RepeatableGroup<Project>) -> Option<String> {
    items(group.renderable().map(|entry| {
        let project = &entry.record;
        let url = ensure_http(&project.url);
        let link = if url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<a class="resume-item-date" href="{}" target="_blank">View</a>"#,
                escape_html(&url)
            )
        };
        item(
            project.name.trim(),
            Some(project.technologies.trim()),
            &link,
            project.description.trim(),
        )
    }))
}

fn certifications(group: &RepeatableGroup<Certification>) -> Option<String> {
    items(group.renderable().map(|entry| {
        let cert = &entry.record;
        let date = YearMonth::parse(&cert.date).map(|d| d.display());
        let credential = cert.credential_id.trim();
        item(
            cert.name.trim(),
            Some(cert.organization.trim()),
            &aside(
                date.as_deref().map(escape_html),
                (!credential.is_empty()).then(|| format!("ID: {}", escape_html(credential))),
            ),
            "",
        )
    }))
}
