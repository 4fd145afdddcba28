//! Static site content and booking options.
//!
//! Everything here is fixed at build time. The booking tables (slots, session types,
//! durations) feed the pricing calculator; the rest is read by the presentational sections.

use crate::{
    DurationOption, NavItem, Service, SessionType, Stat, TeamMember, Testimonial, TimeSlot,
    Trainer,
};

pub const DEFAULT_DURATION_ID: &str = "60";
pub const DEFAULT_SESSION_TYPE_ID: &str = "individual";

pub const TIME_SLOTS: [TimeSlot; 15] = [
    TimeSlot { time: "06:00 AM", available: true, price: 1200 },
    TimeSlot { time: "07:00 AM", available: true, price: 1200 },
    TimeSlot { time: "08:00 AM", available: false, price: 1200 },
    TimeSlot { time: "09:00 AM", available: true, price: 1200 },
    TimeSlot { time: "10:00 AM", available: true, price: 1200 },
    TimeSlot { time: "11:00 AM", available: false, price: 1200 },
    TimeSlot { time: "12:00 PM", available: true, price: 1200 },
    TimeSlot { time: "01:00 PM", available: true, price: 1200 },
    TimeSlot { time: "02:00 PM", available: true, price: 1200 },
    TimeSlot { time: "03:00 PM", available: false, price: 1200 },
    TimeSlot { time: "04:00 PM", available: true, price: 1200 },
    TimeSlot { time: "05:00 PM", available: true, price: 1200 },
    TimeSlot { time: "06:00 PM", available: true, price: 1500 },
    TimeSlot { time: "07:00 PM", available: true, price: 1500 },
    TimeSlot { time: "08:00 PM", available: false, price: 1500 },
];

pub const SESSION_TYPES: [SessionType; 3] = [
    SessionType { id: "individual", name: "Individual Session", duration: "60 min", surcharge: 0 },
    SessionType { id: "couple", name: "Couple Session", duration: "75 min", surcharge: 500 },
    SessionType { id: "group", name: "Group Session (3-5)", duration: "90 min", surcharge: 800 },
];

pub const DURATIONS: [DurationOption; 3] = [
    DurationOption { id: "60", name: "60 minutes", multiplier: 1.0 },
    DurationOption { id: "90", name: "90 minutes", multiplier: 1.5 },
    DurationOption { id: "120", name: "120 minutes", multiplier: 2.0 },
];

/// Rules shown on the contact step of the booking dialog
pub const BOOKING_TERMS: [&str; 4] = [
    "Cancellation allowed up to 24 hours before the session",
    "Payment will be collected at the time of service",
    "Please ensure you have a suitable space for the session",
    "Trainer will arrive 10 minutes before the scheduled time",
];

pub fn find_time_slot(time: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|slot| slot.time == time)
}

pub fn find_session_type(id: &str) -> Option<&'static SessionType> {
    SESSION_TYPES.iter().find(|session_type| session_type.id == id)
}

pub fn find_duration(id: &str) -> Option<&'static DurationOption> {
    DURATIONS.iter().find(|duration| duration.id == id)
}

pub fn find_trainer(id: u32) -> Option<&'static Trainer> {
    TRAINERS.iter().find(|trainer| trainer.id == id)
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Home", href: "/" },
    NavItem { name: "Programs", href: "/programs" },
    NavItem { name: "Trainers", href: "/trainers" },
    NavItem { name: "About", href: "/about" },
    NavItem { name: "Contact", href: "/contact" },
];

pub const HERO_BENEFITS: [&str; 4] = [
    "Certified & experienced trainers",
    "Personalized wellness programs",
    "Flexible scheduling & home service",
    "Proven results with 4.9/5 rating",
];

pub const TRAINERS: [Trainer; 4] = [
    Trainer {
        id: 1,
        name: "Sikha Bansal",
        title: "Senior Yoga Instructor",
        specialization: "Hatha & Vinyasa Yoga",
        experience: "8 years",
        rating: 4.9,
        reviews: 156,
        location: "Mumbai, Pune",
        image: "/t1.jpg",
        certifications: &["RYT-500", "Meditation Teacher", "Ayurveda Certified"],
        languages: &["Hindi", "English", "Marathi"],
        price: "₹1,200",
        availability: "Mon-Sat",
        bio: "Passionate about helping students find balance through traditional yoga practices combined with modern wellness techniques.",
        specialty: "Stress Relief & Flexibility",
        sessions: 1200,
        success_rate: "98%",
    },
    Trainer {
        id: 2,
        name: "Manoj Bansal",
        title: "Power Yoga Specialist",
        specialization: "Power Yoga & Meditation",
        experience: "12 years",
        rating: 4.8,
        reviews: 203,
        location: "Delhi, Gurgaon",
        image: "/t2.jpg",
        certifications: &["RYT-200", "Power Yoga Specialist", "Mindfulness Coach"],
        languages: &["Hindi", "English", "Punjabi"],
        price: "₹1,500",
        availability: "All days",
        bio: "Specializes in dynamic yoga flows and meditation techniques for stress management and mental clarity.",
        specialty: "Power Yoga & Mental Clarity",
        sessions: 1800,
        success_rate: "96%",
    },
    Trainer {
        id: 3,
        name: "Kishan Panwar",
        title: "Wellness & Prenatal Expert",
        specialization: "Prenatal & Restorative Yoga",
        experience: "10 years",
        rating: 5.0,
        reviews: 89,
        location: "Bangalore, Chennai",
        image: "/t3.jpg",
        certifications: &["Prenatal Yoga Certified", "Yin Yoga Teacher", "Therapeutic Yoga"],
        languages: &["English", "Tamil", "Kannada"],
        price: "₹1,000",
        availability: "Mon-Fri",
        bio: "Dedicated to supporting women through their wellness journey with gentle, healing yoga practices.",
        specialty: "Prenatal & Therapeutic",
        sessions: 950,
        success_rate: "100%",
    },
    Trainer {
        id: 4,
        name: "Jacks Maliyakal",
        title: "Master Yoga Teacher",
        specialization: "Ashtanga & Advanced Yoga",
        experience: "15 years",
        rating: 4.9,
        reviews: 267,
        location: "Jaipur, Udaipur",
        image: "/t4.jpg",
        certifications: &["Ashtanga Authorized", "Advanced Yoga Teacher", "Philosophy Teacher"],
        languages: &["Hindi", "English", "Rajasthani"],
        price: "₹1,800",
        availability: "Tue-Sun",
        bio: "Master practitioner of traditional Ashtanga yoga with deep knowledge of yogic philosophy and advanced techniques.",
        specialty: "Advanced Practices",
        sessions: 2200,
        success_rate: "97%",
    },
];

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Personal Yoga Training",
        description: "One-on-one yoga sessions tailored to your fitness level and wellness goals.",
        features: &["Customized routines", "Posture correction", "Breathing techniques", "Flexibility improvement"],
        price: "₹1,200",
        duration: "60 min",
        rating: 4.9,
        sessions: "1000+",
        image: "/02.jpg",
    },
    Service {
        title: "Meditation & Mindfulness",
        description: "Guided meditation sessions to reduce stress and improve mental clarity.",
        features: &["Stress reduction", "Better focus", "Emotional balance", "Sleep improvement"],
        price: "₹800",
        duration: "45 min",
        rating: 4.8,
        sessions: "800+",
        image: "/03.jpg",
    },
    Service {
        title: "Wellness Coaching",
        description: "Comprehensive lifestyle coaching covering nutrition, habits, and wellness practices.",
        features: &["Nutrition guidance", "Lifestyle planning", "Goal setting", "Progress tracking"],
        price: "₹1,500",
        duration: "90 min",
        rating: 5.0,
        sessions: "600+",
        image: "/04.jpg",
    },
];

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        id: 1,
        name: "Priya Mehta",
        age: 32,
        location: "Mumbai",
        profession: "Software Engineer",
        image: "/02.jpg",
        rating: 5,
        title: "Transformed My Work-Life Balance",
        testimonial: "Svasthify completely changed my approach to wellness. The personalized yoga sessions at home fit perfectly into my busy schedule. I've lost 15kg and feel more energetic than ever!",
        results: &["Lost 15kg in 6 months", "Improved flexibility by 80%", "Reduced stress levels significantly"],
        program: "Personal Yoga + Wellness Coaching",
        duration: "6 months",
        before: "Stressed, overweight, poor posture",
        after: "Confident, healthy, energetic",
    },
    Testimonial {
        id: 2,
        name: "Rajesh Kumar",
        age: 45,
        location: "Delhi",
        profession: "Business Owner",
        image: "/03.jpg",
        rating: 5,
        title: "Overcame Chronic Back Pain",
        testimonial: "After years of back pain from desk work, I was skeptical about yoga. But the therapeutic sessions with Svasthify's expert trainers have been life-changing. I'm pain-free for the first time in 5 years!",
        results: &["100% pain relief", "Improved posture", "Better sleep quality"],
        program: "Therapeutic Yoga + Meditation",
        duration: "4 months",
        before: "Chronic pain, poor sleep, limited mobility",
        after: "Pain-free, active, peaceful",
    },
    Testimonial {
        id: 3,
        name: "Anita Sharma",
        age: 28,
        location: "Bangalore",
        profession: "New Mother",
        image: "/placeholder.svg",
        rating: 5,
        title: "Perfect Prenatal & Postnatal Care",
        testimonial: "The prenatal yoga sessions helped me have a smooth pregnancy and delivery. Post-delivery, the gentle recovery program helped me regain my strength safely. Highly recommend to all mothers!",
        results: &["Smooth pregnancy", "Quick recovery", "Regained pre-pregnancy fitness"],
        program: "Prenatal + Postnatal Yoga",
        duration: "12 months",
        before: "Pregnancy discomfort, anxiety",
        after: "Confident mother, strong body",
    },
    Testimonial {
        id: 4,
        name: "Vikram Singh",
        age: 38,
        location: "Pune",
        profession: "Marketing Director",
        image: "/placeholder.svg",
        rating: 5,
        title: "Achieved Peak Mental Clarity",
        testimonial: "The meditation and mindfulness sessions transformed my mental health. I'm more focused at work, handle stress better, and have found inner peace. The convenience of home sessions is unmatched!",
        results: &["90% stress reduction", "Improved focus", "Better decision making"],
        program: "Meditation + Mindfulness Coaching",
        duration: "8 months",
        before: "High stress, poor focus, anxiety",
        after: "Calm, focused, confident leader",
    },
    Testimonial {
        id: 5,
        name: "Meera Patel",
        age: 52,
        location: "Ahmedabad",
        profession: "Teacher",
        image: "/placeholder.svg",
        rating: 5,
        title: "Rediscovered Youthful Energy",
        testimonial: "At 52, I thought it was too late to start yoga. Svasthify's gentle approach and expert guidance proved me wrong. I feel 10 years younger and more flexible than my 30s!",
        results: &["Increased flexibility", "Better joint health", "Renewed confidence"],
        program: "Gentle Yoga + Wellness Coaching",
        duration: "10 months",
        before: "Joint stiffness, low energy, self-doubt",
        after: "Flexible, energetic, confident",
    },
];

pub const TESTIMONIAL_STATS: [Stat; 4] = [
    Stat { value: "2500+", label: "Success Stories" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "4.9/5", label: "Average Rating" },
    Stat { value: "85%", label: "Achieve Goals" },
];

pub const TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        id: 1,
        name: "Dr. Arjun Mehta",
        role: "Founder & CEO",
        specialization: "Ayurveda & Wellness Strategy",
        bio: "With 15+ years in holistic wellness, Dr. Mehta founded Svasthify to bridge ancient wisdom with modern lifestyle needs.",
        achievements: &["PhD in Ayurveda", "500+ Client Transformations", "Wellness Industry Pioneer"],
        email: "arjun@svasthify.com",
    },
    TeamMember {
        id: 2,
        name: "Kavya Sharma",
        role: "Head of Training",
        specialization: "Yoga & Meditation",
        bio: "International yoga instructor with expertise in traditional Hatha and modern Vinyasa practices.",
        achievements: &["RYT-500 Certified", "International Speaker", "Mindfulness Expert"],
        email: "kavya@svasthify.com",
    },
    TeamMember {
        id: 3,
        name: "Rohit Patel",
        role: "Wellness Technology Lead",
        specialization: "Digital Health & Innovation",
        bio: "Tech entrepreneur passionate about leveraging technology to make wellness more accessible and personalized.",
        achievements: &["MIT Graduate", "Health Tech Innovator", "AI Wellness Pioneer"],
        email: "rohit@svasthify.com",
    },
    TeamMember {
        id: 4,
        name: "Dr. Meera Gupta",
        role: "Chief Wellness Officer",
        specialization: "Nutrition & Lifestyle Medicine",
        bio: "Certified nutritionist and lifestyle medicine practitioner focused on sustainable health transformations.",
        achievements: &["MD in Lifestyle Medicine", "Nutrition Specialist", "Wellness Author"],
        email: "meera@svasthify.com",
    },
];

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { value: "2500+", label: "Lives Transformed" },
    Stat { value: "50+", label: "Expert Trainers" },
    Stat { value: "15+", label: "Cities Covered" },
    Stat { value: "4.9/5", label: "Client Rating" },
];

pub const FOOTER_SERVICES: [&str; 6] = [
    "Personal Yoga Training",
    "AI-Powered Meditation",
    "Wellness Coaching",
    "Prenatal Yoga",
    "Power Yoga Sessions",
    "Therapeutic Yoga",
];

pub const FOOTER_LINKS: [NavItem; 6] = [
    NavItem { name: "About Us", href: "#about" },
    NavItem { name: "Our Trainers", href: "#trainers" },
    NavItem { name: "Success Stories", href: "#testimonials" },
    NavItem { name: "Pricing Plans", href: "#pricing" },
    NavItem { name: "Wellness Blog", href: "#blog" },
    NavItem { name: "Contact Support", href: "#contact" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(find_time_slot("06:00 PM").map(|s| s.price), Some(1500));
        assert_eq!(find_time_slot("06:00 AM").map(|s| s.price), Some(1200));
        assert!(find_time_slot("05:30 AM").is_none());

        assert_eq!(find_session_type("couple").map(|s| s.surcharge), Some(500));
        assert_eq!(find_duration("90").map(|d| d.multiplier), Some(1.5));
        assert_eq!(find_trainer(4).map(|t| t.name), Some("Jacks Maliyakal"));
        assert!(find_trainer(99).is_none());
    }

    #[test]
    fn test_unavailable_slots() {
        let unavailable: Vec<&str> = TIME_SLOTS
            .iter()
            .filter(|slot| !slot.available)
            .map(|slot| slot.time)
            .collect();
        assert_eq!(unavailable, vec!["08:00 AM", "11:00 AM", "03:00 PM", "08:00 PM"]);
    }

    #[test]
    fn test_defaults_exist_in_tables() {
        assert!(find_duration(DEFAULT_DURATION_ID).is_some());
        assert!(find_session_type(DEFAULT_SESSION_TYPE_ID).is_some());
    }
}
