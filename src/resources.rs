use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceMeta {
    ReadTime(&'static str),
    Duration(&'static str),
    Difficulty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    #[serde(flatten)]
    pub meta: ResourceMeta,
}

pub const FILTER_ALL: &str = "all";

pub static CATALOG: [Resource; 4] = [
    Resource {
        id: 1,
        kind: "articles",
        title: "Understanding Anxiety",
        description: "Learn about anxiety symptoms and coping strategies",
        image: "https://images.unsplash.com/photo-1474631245212-32dc3c8310c6?w=300",
        meta: ResourceMeta::ReadTime("5 min read"),
    },
    Resource {
        id: 2,
        kind: "videos",
        title: "Guided Meditation",
        description: "A 10-minute meditation for stress relief",
        image: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=300",
        meta: ResourceMeta::Duration("10 min"),
    },
    Resource {
        id: 3,
        kind: "exercises",
        title: "Breathing Techniques",
        description: "Simple breathing exercises for anxiety relief",
        image: "https://images.unsplash.com/photo-1506126969121-f9c0ebe88b47?w=300",
        meta: ResourceMeta::Difficulty("Beginner"),
    },
    Resource {
        id: 4,
        kind: "articles",
        title: "Depression Support",
        description: "Understanding and managing depression",
        image: "https://images.unsplash.com/photo-1454894760-6d7d082e3b2f?w=300",
        meta: ResourceMeta::ReadTime("7 min read"),
    },
];

/// `all` keeps everything; any other value must equal the resource type exactly.
pub fn filter(kind: &str) -> Vec<&'static Resource> {
    CATALOG
        .iter()
        .filter(|resource| kind == FILTER_ALL || resource.kind == kind)
        .collect()
}

pub fn find(id: u32) -> Option<&'static Resource> {
    CATALOG.iter().find(|resource| resource.id == id)
}
