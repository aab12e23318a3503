//! The fixed seed set used to initialize an empty store, and by hosts as a
//! local fallback when the store cannot be reached.

use crate::types::Project;

fn project(id: i64, title: &str, description: &str, category: &str, image_url: &str, tags: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        image_url: image_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Minimalist Brand Identity",
            "A clean, modern brand identity for a luxury fashion label featuring custom typography and a refined color palette.",
            "Branding",
            "https://images.unsplash.com/photo-1541185933-ef5d8ed016c2?q=80&w=1170&auto=format&fit=crop",
            &["Brand Identity", "Logo Design", "Typography"],
        ),
        project(
            2,
            "E-Commerce Website Design",
            "Responsive e-commerce platform with intuitive navigation and seamless checkout experience.",
            "Web Design",
            "https://images.unsplash.com/photo-1547658719-da2b51169166?q=80&w=1164&auto=format&fit=crop",
            &["UI/UX", "Web Development", "E-commerce"],
        ),
        project(
            3,
            "Abstract Photography Series",
            "Collection of abstract architectural photographs exploring light, shadow, and form.",
            "Photography",
            "https://images.unsplash.com/photo-1545178803-4056771d60a3?q=80&w=1170&auto=format&fit=crop",
            &["Photography", "Abstract", "Architecture"],
        ),
        project(
            4,
            "Mobile App Interface",
            "Health tracking application with intuitive data visualization and user-friendly interface.",
            "UI/UX",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?q=80&w=1074&auto=format&fit=crop",
            &["Mobile Design", "UI/UX", "App Development"],
        ),
        project(
            5,
            "Packaging Design",
            "Sustainable packaging solution for an organic food brand with distinctive visual language.",
            "Branding",
            "https://images.unsplash.com/photo-1635405446898-da87459d15e3?q=80&w=1025&auto=format&fit=crop",
            &["Packaging", "Sustainable Design", "Branding"],
        ),
        project(
            6,
            "Editorial Layout Design",
            "Magazine spread layout with innovative typography and visual hierarchy.",
            "Print",
            "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?q=80&w=1287&auto=format&fit=crop",
            &["Editorial Design", "Typography", "Print"],
        ),
    ]
}
