//! Fixture catalogs backing the listing views.
//!
//! These are fixed in-memory datasets; the listing views filter them with
//! local UI state and never hit the server. Doula and activity entries are
//! also what the messages and community fixtures refer back to.

/// A doula card in the Find a Doula view.
#[derive(Debug, Clone, PartialEq)]
pub struct DoulaCard {
    pub name: &'static str,
    pub image: &'static str,
    pub location: &'static str,
    pub rating: f64,
    pub reviews: u32,
    pub specialties: Vec<String>,
    pub availability: &'static str,
    pub religion: &'static str,
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn doulas() -> Vec<DoulaCard> {
    vec![
        DoulaCard {
            name: "Rachel Johnson",
            image: "https://images.unsplash.com/photo-1618085222100-93f0eecad0aa?auto=format&fit=crop&q=80&w=200",
            location: "New York, NY",
            rating: 4.9,
            reviews: 127,
            specialties: tags(&["Birth Doula", "Postpartum Care", "Lactation Support", "Cooking"]),
            availability: "Available from June",
            religion: "Interfaith",
        },
        DoulaCard {
            name: "Maria Rodriguez",
            image: "https://images.unsplash.com/photo-1488426862026-3ee34a7d66df?auto=format&fit=crop&q=80&w=200",
            location: "Los Angeles, CA",
            rating: 4.8,
            reviews: 98,
            specialties: tags(&["Birth Doula", "Prenatal Yoga", "Childbirth Education", "Housekeeping"]),
            availability: "Available Now",
            religion: "Christian",
        },
        DoulaCard {
            name: "Vivian Chen",
            image: "https://images.unsplash.com/photo-1513097633097-329a3a64e0d4?auto=format&fit=crop&q=80&w=200",
            location: "San Francisco, CA",
            rating: 5.0,
            reviews: 89,
            specialties: tags(&["Birth Doula", "Pregnancy Massage", "Hypnobirthing", "Cooking", "Housekeeping"]),
            availability: "Available from May",
            religion: "Buddhist",
        },
        DoulaCard {
            name: "Amara Okina",
            image: "https://images.unsplash.com/photo-1530785602389-07594beb8b73?auto=format&fit=crop&q=80&w=200",
            location: "Chicago, IL",
            rating: 4.9,
            reviews: 156,
            specialties: tags(&["Birth Doula", "Ayurvedic Care", "Prenatal Nutrition", "Cooking"]),
            availability: "Available from July",
            religion: "Hindu",
        },
        DoulaCard {
            name: "Jessica Thompson",
            image: "https://plus.unsplash.com/premium_photo-1669882305249-5af7f5ed5c10?auto=format&fit=crop&q=80&w=200",
            location: "Austin, TX",
            rating: 4.7,
            reviews: 73,
            specialties: tags(&["Birth Doula", "Childbirth Education", "Breastfeeding Support", "Housekeeping"]),
            availability: "Available Now",
            religion: "Secular",
        },
        DoulaCard {
            name: "Leah Ahmed",
            image: "https://plus.unsplash.com/premium_photo-1681489830925-d47810835fda?auto=format&fit=crop&q=80&w=200",
            location: "Miami, FL",
            rating: 4.9,
            reviews: 112,
            specialties: tags(&["Birth Doula", "Postpartum Care", "Jewish Birth Traditions", "Housekeeping"]),
            availability: "Available from August",
            religion: "Jewish",
        },
    ]
}

/// Specialty facet values offered in the Find a Doula filter panel.
pub const SPECIALTIES: &[&str] = &[
    "Birth Doula",
    "Postpartum Care",
    "Lactation Support",
    "Prenatal Yoga",
    "Childbirth Education",
    "Pregnancy Massage",
    "Hypnobirthing",
    "Prenatal Nutrition",
    "Cooking",
    "Housekeeping",
    "Breastfeeding Support",
    "Ayurvedic Care",
    "Jewish Birth Traditions",
];

/// Cultural-background facet values (matched against a doula's religion).
pub const CULTURAL_PREFERENCES: &[&str] = &[
    "Somalian",
    "Moroccan",
    "Korean",
    "Trinidadian",
    "Mexican",
    "Indian",
    "Christian",
    "Jewish",
    "Muslim",
    "Hindu",
    "Buddhist",
    "Interfaith",
    "Secular",
];

/// An entry in the Activities view.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub title: &'static str,
    pub activity_type: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub instructor: &'static str,
    pub price: &'static str,
    pub rating: f64,
    pub participants: u32,
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            title: "Prenatal Yoga Flow",
            activity_type: "yoga",
            description: "Gentle yoga sequences designed specifically for expecting mothers.",
            date: "2025-02-15",
            time: "10:00 AM",
            location: "Wellness Center, Atlanta",
            instructor: "Sarah Chen",
            price: "$25",
            rating: 4.8,
            participants: 12,
        },
        Activity {
            title: "Birthing Preparation Workshop",
            activity_type: "workshop",
            description: "Comprehensive workshop covering birthing techniques and preparation.",
            date: "2025-02-18",
            time: "2:00 PM",
            location: "Family Center, Decatur",
            instructor: "Dr. Emily Rodriguez",
            price: "$120",
            rating: 4.9,
            participants: 8,
        },
        Activity {
            title: "Prenatal Fitness Class",
            activity_type: "fitness",
            description: "Safe workout routines with yoga-inspired stretching for pregnant women.",
            date: "2025-02-22",
            time: "9:00 AM",
            location: "FitMama Studio, Buckhead",
            instructor: "Jessica Parker",
            price: "$30",
            rating: 4.6,
            participants: 10,
        },
        Activity {
            title: "Breastfeeding Basics",
            activity_type: "education",
            description: "Educational session on breastfeeding techniques and tips.",
            date: "2025-02-25",
            time: "3:00 PM",
            location: "Maternal Care Center, Sandy Springs",
            instructor: "Maria Garcia",
            price: "$45",
            rating: 5.0,
            participants: 6,
        },
    ]
}

/// Activity-type facet values with their display labels.
pub const ACTIVITY_TYPES: &[(&str, &str)] = &[
    ("yoga", "Yoga Classes"),
    ("workshop", "Workshops"),
    ("support-group", "Support Groups"),
    ("fitness", "Fitness Classes"),
    ("education", "Education"),
];

/// A single resource card.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub tips: Vec<String>,
}

fn resource(title: &'static str, description: &'static str, tips: &[&str]) -> Resource {
    Resource {
        title,
        description,
        tips: tags(tips),
    }
}

/// Resource categories in display order, each with its entries.
pub fn resource_categories() -> Vec<(&'static str, Vec<Resource>)> {
    vec![
        (
            "Herbal Remedies",
            vec![
                resource("Chamomile Tea", "Calming and sleep-promoting", &["Drink before bedtime", "Safe during pregnancy", "Helps with anxiety"]),
                resource("Peppermint Leaf", "Natural digestive support", &["Aids digestion", "Relieves nausea", "Refreshing taste"]),
                resource("Red Raspberry Leaf", "Uterine support", &["Start in second trimester", "Drink as tea", "Strengthens uterus"]),
                resource("Nettle Leaf", "Nutrient-rich support", &["High in iron", "Supports kidney function", "Blend with other teas"]),
            ],
        ),
        (
            "Essential Oils",
            vec![
                resource("Lavender", "Relaxation and sleep", &["Use in diffuser", "Add to bath", "Safe during pregnancy"]),
                resource("Peppermint", "Nausea and headache relief", &["Inhale for nausea", "Dilute properly", "Avoid in late pregnancy"]),
                resource("Sweet Orange", "Mood lifting", &["Safe throughout pregnancy", "Use in massage oil", "Energizing aroma"]),
                resource("Ylang Ylang", "Stress relief", &["Calming properties", "Use in massage blend", "Promotes relaxation"]),
            ],
        ),
        (
            "Nutritious Recipes",
            vec![
                resource("Lactation Cookies", "Milk supply support", &["Contains oats and flax", "Make in bulk", "Freeze extras"]),
                resource("Iron-Rich Smoothie", "Energy boosting", &["Use spinach base", "Add vitamin C", "Best in morning"]),
                resource("Healing Bone Broth", "Postpartum recovery", &["Rich in minerals", "Make ahead", "Freeze portions"]),
                resource("Golden Milk", "Anti-inflammatory drink", &["Use turmeric and ginger", "Add black pepper", "Drink before bed"]),
            ],
        ),
        (
            "Spiritual Practices",
            vec![
                resource("Meditation", "Mind-body connection", &["Start with 5 minutes", "Focus on breath", "Morning practice"]),
                resource("Birth Affirmations", "Mental preparation", &["Write your own", "Practice daily", "Visualize success"]),
                resource("Gratitude Journal", "Emotional wellbeing", &["Daily entries", "Include small wins", "Express feelings"]),
                resource("Sacred Space Creation", "Personal sanctuary", &["Choose calming items", "Include nature elements", "Regular cleansing"]),
            ],
        ),
        (
            "Hygiene & Self-Care",
            vec![
                resource("Peri Bottle Care", "Essential postpartum care", &["Use after every bathroom visit", "Fill with warm water", "Add witch hazel for healing"]),
                resource("Sitz Bath", "Promotes healing", &["Use 2-3 times daily", "Add epsom salts", "Keep water warm, not hot"]),
                resource("Breast Care", "Comfort and prevention", &["Air dry after feeding", "Use nipple cream", "Change pads frequently"]),
                resource("Perineal Healing", "Recovery support", &["Ice pack rotation", "Gentle cleaning", "Air exposure"]),
            ],
        ),
        (
            "Food Recommendations",
            vec![
                resource("Iron-Rich Foods", "Energy support", &["Dark leafy greens", "Lean red meat", "Pair with vitamin C"]),
                resource("Protein Sources", "Recovery support", &["Eggs and fish", "Legumes", "Greek yogurt"]),
                resource("Hydration Guide", "Essential fluid intake", &["Water with meals", "Herbal teas", "Coconut water"]),
                resource("Lactation Foods", "Milk supply support", &["Oatmeal and quinoa", "Fennel and fenugreek", "Dark leafy greens"]),
            ],
        ),
    ]
}

/// A community feed post.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityPost {
    pub author: &'static str,
    pub author_role: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: &'static str,
    pub hashtags: Vec<String>,
}

pub fn community_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            author: "Ashlynn Smith",
            author_role: "Expecting Mom",
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=200",
            content: "Just had my 20-week anatomy scan! Everything looks perfect with our little girl. So grateful for this community and all the support. 💕 Any other moms-to-be have their anatomy scan coming up?",
            likes: 24,
            comments: 8,
            timestamp: "2 hours ago",
            hashtags: tags(&["PregnancyJourney", "AnatomyScan", "20Weeks"]),
        },
        CommunityPost {
            author: "Emily Michaels",
            author_role: "Certified Doula",
            avatar: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=200",
            content: "Quick tip for managing morning sickness: Try eating small, frequent meals throughout the day instead of three large ones. Ginger tea can also be really helpful! What remedies have worked for you?",
            likes: 45,
            comments: 15,
            timestamp: "5 hours ago",
            hashtags: tags(&["MorningSickness", "PregnancyTips", "Wellness"]),
        },
        CommunityPost {
            author: "Brenda Rogers",
            author_role: "New Mom",
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200",
            content: "One month postpartum! It's been a journey of ups and downs, but this little one makes it all worth it. Remember to be gentle with yourself, mamas. Recovery takes time. 🤱",
            likes: 67,
            comments: 23,
            timestamp: "1 day ago",
            hashtags: tags(&["Postpartum", "NewMom", "Recovery"]),
        },
    ]
}

/// A community group card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommunityGroup {
    pub name: &'static str,
    pub members: u32,
    pub posts_today: u32,
}

pub const COMMUNITY_GROUPS: &[CommunityGroup] = &[
    CommunityGroup { name: "First Time Moms", members: 1250, posts_today: 45 },
    CommunityGroup { name: "Natural Birth Support", members: 890, posts_today: 32 },
    CommunityGroup { name: "Working Moms", members: 1100, posts_today: 28 },
    CommunityGroup { name: "Pregnancy Fitness", members: 750, posts_today: 15 },
    CommunityGroup { name: "Mindful Motherhood", members: 980, posts_today: 42 },
    CommunityGroup { name: "Birth Stories", members: 1500, posts_today: 65 },
];

/// A conversation in the Messages sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub name: &'static str,
    pub avatar: &'static str,
    pub last_message: &'static str,
    pub timestamp: &'static str,
    pub unread: u32,
    pub online: bool,
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            name: "Rachel Johnson",
            avatar: "https://images.unsplash.com/photo-1618085222100-93f0eecad0aa?auto=format&fit=crop&q=80&w=200",
            last_message: "Looking forward to our appointment tomorrow!",
            timestamp: "2:30 PM",
            unread: 2,
            online: true,
        },
        Conversation {
            name: "Amara Okina",
            avatar: "https://images.unsplash.com/photo-1530785602389-07594beb8b73?auto=format&fit=crop&q=80&w=200",
            last_message: "Your test results look great! Everything is...",
            timestamp: "11:45 AM",
            unread: 0,
            online: true,
        },
        Conversation {
            name: "Jessica Thompson",
            avatar: "https://plus.unsplash.com/premium_photo-1669882305249-5af7f5ed5c10?auto=format&fit=crop&q=80&w=200",
            last_message: "I can recommend some great prenatal yoga...",
            timestamp: "Yesterday",
            unread: 0,
            online: false,
        },
    ]
}

/// One message inside the open thread.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMessage {
    pub content: String,
    pub from_me: bool,
    pub timestamp: String,
}

fn thread_message(content: &str, from_me: bool, timestamp: &str) -> ThreadMessage {
    ThreadMessage {
        content: content.to_string(),
        from_me,
        timestamp: timestamp.to_string(),
    }
}

pub fn thread_messages() -> Vec<ThreadMessage> {
    vec![
        thread_message("Hi Layla! How are you feeling today?", false, "2:15 PM"),
        thread_message(
            "I'm doing well, thanks! Just had some questions about tomorrow's appointment.",
            true,
            "2:20 PM",
        ),
        thread_message("Of course! What would you like to know?", false, "2:25 PM"),
        thread_message("Should I bring anything specific with me?", true, "2:28 PM"),
        thread_message(
            "Just bring your pregnancy journal and any questions you have. Looking forward to our appointment tomorrow!",
            false,
            "2:30 PM",
        ),
    ]
}

/// People available to start a new conversation with.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportContact {
    pub name: &'static str,
    pub avatar: &'static str,
    pub role: &'static str,
    pub online: bool,
}

pub fn support_contacts() -> Vec<SupportContact> {
    vec![
        SupportContact {
            name: "Sophia Murphy",
            avatar: "https://images.unsplash.com/photo-1629747387925-6905ff5a558a?auto=format&fit=crop&q=80&w=200",
            role: "mother",
            online: true,
        },
        SupportContact {
            name: "Mable Cross",
            avatar: "https://images.unsplash.com/photo-1489424731084-a5d8b219a5bb?auto=format&fit=crop&q=80&w=200",
            role: "doula",
            online: false,
        },
        SupportContact {
            name: "Rachel Johnson",
            avatar: "https://images.unsplash.com/photo-1618085222100-93f0eecad0aa?auto=format&fit=crop&q=80&w=200",
            role: "doula",
            online: true,
        },
        SupportContact {
            name: "Amara Okina",
            avatar: "https://images.unsplash.com/photo-1530785602389-07594beb8b73?auto=format&fit=crop&q=80&w=200",
            role: "doula",
            online: true,
        },
        SupportContact {
            name: "Jessica Thompson",
            avatar: "https://plus.unsplash.com/premium_photo-1669882305249-5af7f5ed5c10?auto=format&fit=crop&q=80&w=200",
            role: "mother",
            online: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doula_fixture_shape() {
        let doulas = doulas();
        assert_eq!(doulas.len(), 6);
        let cooking = doulas
            .iter()
            .filter(|d| d.specialties.contains(&"Cooking".to_string()))
            .count();
        assert_eq!(cooking, 3);
        // every specialty tag is offered in the filter panel
        for doula in &doulas {
            for s in &doula.specialties {
                assert!(SPECIALTIES.contains(&s.as_str()), "missing facet: {s}");
            }
        }
    }

    #[test]
    fn activity_types_cover_the_fixture() {
        let known: Vec<&str> = ACTIVITY_TYPES.iter().map(|(v, _)| *v).collect();
        for activity in activities() {
            assert!(known.contains(&activity.activity_type));
        }
    }

    #[test]
    fn six_resource_categories_of_four() {
        let categories = resource_categories();
        assert_eq!(categories.len(), 6);
        for (name, entries) in &categories {
            assert_eq!(entries.len(), 4, "category {name}");
        }
    }
}
