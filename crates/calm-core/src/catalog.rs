//! Fixed reference data: the therapy tool hub, support groups, and the music
//! and yoga video catalogs.

use serde::Serialize;

/// An entry in the therapy tool hub, with the command that opens it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TherapyTool {
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupportGroup {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub members: u32,
    pub online: u32,
    pub topic: &'static str,
}

/// A hosted video. `duration` is only known for yoga sessions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub video_id: &'static str,
    pub description: &'static str,
    pub duration: Option<&'static str>,
}

impl Video {
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

pub const THERAPY_TOOLS: &[TherapyTool] = &[
    TherapyTool {
        title: "Journal",
        description: "Write private journal entries and track your thoughts over time",
        command: "calm journal",
    },
    TherapyTool {
        title: "Breathing Exercise",
        description: "Guided box breathing technique to help you relax and focus",
        command: "calm breathe",
    },
    TherapyTool {
        title: "Music Therapy",
        description: "Curated collection of calming music to soothe your mind",
        command: "calm music",
    },
    TherapyTool {
        title: "Yoga Therapy",
        description: "Guided yoga sessions for physical and mental wellness",
        command: "calm yoga",
    },
];

pub const SUPPORT_GROUPS: &[SupportGroup] = &[
    SupportGroup {
        id: 1,
        name: "Anxiety Support",
        description: "A safe space to discuss anxiety and coping strategies",
        members: 124,
        online: 12,
        topic: "Mental Health",
    },
    SupportGroup {
        id: 2,
        name: "Depression Recovery",
        description: "Share experiences and support each other through depression",
        members: 98,
        online: 8,
        topic: "Mental Health",
    },
    SupportGroup {
        id: 3,
        name: "Stress Management",
        description: "Learn and share stress management techniques",
        members: 156,
        online: 15,
        topic: "Wellness",
    },
    SupportGroup {
        id: 4,
        name: "Mindfulness Practice",
        description: "Daily mindfulness exercises and meditation discussions",
        members: 89,
        online: 10,
        topic: "Mindfulness",
    },
    SupportGroup {
        id: 5,
        name: "Sleep Support",
        description: "Tips and support for better sleep hygiene",
        members: 67,
        online: 5,
        topic: "Health",
    },
    SupportGroup {
        id: 6,
        name: "Work-Life Balance",
        description: "Discuss strategies for maintaining healthy work-life balance",
        members: 112,
        online: 9,
        topic: "Lifestyle",
    },
];

pub const MUSIC_TRACKS: &[Video] = &[
    Video {
        id: "1",
        title: "Peaceful Piano Music",
        video_id: "lTRiuFIWV54",
        description: "Relaxing piano melodies for stress relief",
        duration: None,
    },
    Video {
        id: "2",
        title: "Nature Sounds & Meditation",
        video_id: "eKFTSSKCzWA",
        description: "Calming nature sounds with gentle music",
        duration: None,
    },
    Video {
        id: "3",
        title: "Deep Sleep Music",
        video_id: "1ZYbU82GVz4",
        description: "Soothing music for deep relaxation and sleep",
        duration: None,
    },
    Video {
        id: "4",
        title: "Stress Relief Music",
        video_id: "VgEaLCskZqQ",
        description: "Healing music for anxiety and stress",
        duration: None,
    },
];

pub const YOGA_SESSIONS: &[Video] = &[
    Video {
        id: "1",
        title: "Morning Yoga for Beginners",
        video_id: "VaoV1PrYft4",
        description: "Gentle 20-minute yoga flow to start your day",
        duration: Some("20 min"),
    },
    Video {
        id: "2",
        title: "Yoga for Stress Relief",
        video_id: "JEJQPy8Zrfk",
        description: "Calming poses to release tension and anxiety",
        duration: Some("15 min"),
    },
    Video {
        id: "3",
        title: "Bedtime Yoga for Better Sleep",
        video_id: "BiWDsfZ3zbo",
        description: "Relaxing stretches before bed",
        duration: Some("18 min"),
    },
    Video {
        id: "4",
        title: "Yoga for Lower Back Pain",
        video_id: "VgEaLCskZqQ",
        description: "Gentle movements to ease back discomfort",
        duration: Some("25 min"),
    },
];

pub fn find_group(id: u32) -> Option<&'static SupportGroup> {
    SUPPORT_GROUPS.iter().find(|g| g.id == id)
}
