//! Skill name → icon URL lookup.
//!
//! The catalog is injected into the renderer so tests can swap in a small table.
//! Lookups are exact and case-sensitive after trimming; unknown skills render
//! as text only.

use std::collections::HashMap;

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/";

/// Built-in devicon table: (skill name, path under `DEVICON_BASE`).
const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("React", "react/react-original.svg"),
    ("JavaScript", "javascript/javascript-original.svg"),
    ("TypeScript", "typescript/typescript-original.svg"),
    ("Node.js", "nodejs/nodejs-original.svg"),
    ("Python", "python/python-original.svg"),
    ("Java", "java/java-original.svg"),
    ("HTML", "html5/html5-original.svg"),
    ("CSS", "css3/css3-original.svg"),
    ("Vue.js", "vuejs/vuejs-original.svg"),
    ("Angular", "angularjs/angularjs-original.svg"),
    ("MongoDB", "mongodb/mongodb-original.svg"),
    ("PostgreSQL", "postgresql/postgresql-original.svg"),
    ("MySQL", "mysql/mysql-original.svg"),
    ("Docker", "docker/docker-original.svg"),
    ("Git", "git/git-original.svg"),
    ("AWS", "amazonwebservices/amazonwebservices-original.svg"),
    ("Firebase", "firebase/firebase-plain.svg"),
    ("GraphQL", "graphql/graphql-plain.svg"),
    ("Redux", "redux/redux-original.svg"),
    ("Tailwind CSS", "tailwindcss/tailwindcss-plain.svg"),
    ("Bootstrap", "bootstrap/bootstrap-original.svg"),
    ("Sass", "sass/sass-original.svg"),
    ("Express.js", "express/express-original.svg"),
    ("Next.js", "nextjs/nextjs-original.svg"),
    ("Flutter", "flutter/flutter-original.svg"),
    ("React Native", "react/react-original.svg"),
    ("C++", "cplusplus/cplusplus-original.svg"),
    ("C#", "csharp/csharp-original.svg"),
    ("PHP", "php/php-original.svg"),
    ("Laravel", "laravel/laravel-plain.svg"),
    ("Django", "django/django-plain.svg"),
    ("Flask", "flask/flask-original.svg"),
    ("Kubernetes", "kubernetes/kubernetes-plain.svg"),
    ("Redis", "redis/redis-original.svg"),
    ("Figma", "figma/figma-original.svg"),
    ("Adobe XD", "xd/xd-plain.svg"),
];

#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    icons: HashMap<String, String>,
}

impl IconCatalog {
    /// The devicon table shipped with the generator.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_ICONS
                .iter()
                .map(|(name, path)| (*name, format!("{DEVICON_BASE}{path}"))),
        )
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        IconCatalog {
            icons: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn lookup(&self, skill_name: &str) -> Option<&str> {
        self.icons.get(skill_name.trim()).map(String::as_str)
    }
}
