//! Built-in template catalog.
//!
//! Each [`TemplateKind`] maps to a template set: the view class, its
//! view-model and the data-binding layout the view class inflates.

use std::fmt;

use clap::ValueEnum;

/// What is being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    Activity,
    Fragment,
    DialogFragment,
    ViewModel,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::Activity => "activity",
            TemplateKind::Fragment => "fragment",
            TemplateKind::DialogFragment => "dialog-fragment",
            TemplateKind::ViewModel => "view-model",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Kotlin class under `java/<package path>`
    Source,
    /// Data-binding layout under `res/layout`
    Layout,
}

/// A single file of a template set.
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateFile {
    /// Identifier, also the override file name without the `.j2` extension
    pub id: &'static str,
    pub role: Role,
    /// Target path relative to the source set, itself a template
    pub target: &'static str,
    /// Built-in template body
    pub body: &'static str,
}

pub const ACTIVITY: TemplateFile = TemplateFile {
    id: "activity.kt",
    role: Role::Source,
    target: "java/{{ package_path }}/{{ name }}Activity.kt",
    body: include_str!("../templates/activity.kt.j2"),
};

pub const VIEW_MODEL: TemplateFile = TemplateFile {
    id: "view_model.kt",
    role: Role::Source,
    target: "java/{{ package_path }}/{{ name }}ViewModel.kt",
    body: include_str!("../templates/view_model.kt.j2"),
};

pub const FRAGMENT: TemplateFile = TemplateFile {
    id: "fragment.kt",
    role: Role::Source,
    target: "java/{{ package_path }}/{{ name }}Fragment.kt",
    body: include_str!("../templates/fragment.kt.j2"),
};

pub const DIALOG_FRAGMENT: TemplateFile = TemplateFile {
    id: "dialog_fragment.kt",
    role: Role::Source,
    target: "java/{{ package_path }}/{{ name }}DialogFragment.kt",
    body: include_str!("../templates/dialog_fragment.kt.j2"),
};

pub const ACTIVITY_LAYOUT: TemplateFile = TemplateFile {
    id: "activity.xml",
    role: Role::Layout,
    target: "res/layout/activity_{{ lower_name }}.xml",
    body: include_str!("../templates/activity.xml.j2"),
};

pub const FRAGMENT_LAYOUT: TemplateFile = TemplateFile {
    id: "fragment.xml",
    role: Role::Layout,
    target: "res/layout/fragment_{{ lower_name }}.xml",
    body: include_str!("../templates/fragment.xml.j2"),
};

pub const DIALOG_FRAGMENT_LAYOUT: TemplateFile = TemplateFile {
    id: "dialog_fragment.xml",
    role: Role::Layout,
    target: "res/layout/dialog_fragment_{{ lower_name }}.xml",
    body: include_str!("../templates/dialog_fragment.xml.j2"),
};

/// Every built-in template, in catalog order.
pub const ALL_TEMPLATES: [&TemplateFile; 7] = [
    &ACTIVITY,
    &VIEW_MODEL,
    &FRAGMENT,
    &DIALOG_FRAGMENT,
    &ACTIVITY_LAYOUT,
    &FRAGMENT_LAYOUT,
    &DIALOG_FRAGMENT_LAYOUT,
];

/// Looks a built-in template up by id.
pub fn find_template(id: &str) -> Option<&'static TemplateFile> {
    ALL_TEMPLATES.into_iter().find(|file| file.id == id)
}

/// Which optional members of a set to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOptions {
    pub view_model: bool,
    pub layout: bool,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self { view_model: true, layout: true }
    }
}

/// Returns the files generated for `kind`, view class first.
///
/// `view_model` is ignored for [`TemplateKind::ViewModel`], whose only
/// member is the view-model itself.
pub fn template_set(kind: TemplateKind, options: SetOptions) -> Vec<&'static TemplateFile> {
    let (view, layout): (&'static TemplateFile, &'static TemplateFile) = match kind {
        TemplateKind::Activity => (&ACTIVITY, &ACTIVITY_LAYOUT),
        TemplateKind::Fragment => (&FRAGMENT, &FRAGMENT_LAYOUT),
        TemplateKind::DialogFragment => (&DIALOG_FRAGMENT, &DIALOG_FRAGMENT_LAYOUT),
        TemplateKind::ViewModel => return vec![&VIEW_MODEL],
    };

    let mut files = vec![view];
    if options.view_model {
        files.push(&VIEW_MODEL);
    }
    if options.layout {
        files.push(layout);
    }
    files
}
