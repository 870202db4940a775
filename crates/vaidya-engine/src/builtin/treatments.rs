use vaidya_core::models::treatment::{Treatment, TreatmentCategory};

// depressive_episode is deliberately left without entries: it is referred
// to a professional rather than self-care.
pub fn all() -> Vec<Treatment> {
    use TreatmentCategory::*;

    vec![
        treatment("tulsi_ginger_tea", "Tulsi & Ginger Tea", Herbal, &["common_cold"])
            .describe("Warm infusion of holy basil and fresh ginger to ease congestion and soothe the throat.")
            .instructions("Steep 5 tulsi leaves and a thumb of crushed ginger in hot water for 5 minutes.")
            .dosage("1 cup, three times a day")
            .duration("Until symptoms subside, up to 7 days")
            .precautions(&["Reduce ginger if prone to acidity"]),
        treatment("steam_inhalation", "Eucalyptus Steam Inhalation", Procedure, &["common_cold"])
            .describe("Inhaling steam with a few drops of eucalyptus oil to open the nasal passages.")
            .instructions("Lean over a bowl of hot water, cover the head with a towel and breathe for 10 minutes.")
            .duration("Twice daily for 3-5 days")
            .precautions(&["Keep a safe distance from the hot water", "Not for children under 6"]),
        treatment("brahmi", "Brahmi", Herbal, &["migraine", "anxiety_disorder", "insomnia_disorder"])
            .describe("Bacopa monnieri, a traditional nervine tonic supporting calm and focus.")
            .dosage("300 mg standardized extract, twice daily")
            .duration("8-12 weeks")
            .precautions(&["May cause mild digestive upset", "Consult a doctor if on thyroid medication"]),
        treatment("shirodhara", "Shirodhara", Procedure, &["migraine", "anxiety_disorder", "insomnia_disorder"])
            .describe("A steady stream of warm herbal oil poured over the forehead to quiet the nervous system.")
            .duration("Course of 7-14 sessions with a qualified practitioner")
            .precautions(&["Avoid during fever or acute cold"]),
        treatment("regular_sleep_routine", "Regular Sleep Routine", Lifestyle, &["migraine", "insomnia_disorder", "chronic_fatigue"])
            .describe("Going to bed and waking at fixed times, with screens off an hour before sleep.")
            .instructions("Aim for lights out by 10:30 pm and 7-8 hours of sleep."),
        treatment("avipattikar_churna", "Avipattikar Churna", Herbal, &["acid_reflux"])
            .describe("Classical powder formulation that balances Pitta and relieves hyperacidity.")
            .dosage("3-6 g with water before meals")
            .duration("2-4 weeks")
            .precautions(&["Not recommended during pregnancy"]),
        treatment("cooling_diet", "Pitta-Pacifying Diet", Dietary, &["acid_reflux", "eczema"])
            .describe("Favour cooling foods such as cucumber, coconut water and sweet fruits; avoid spicy, sour and fried food.")
            .instructions("Eat the main meal at midday and finish dinner three hours before bed."),
        treatment("trikatu", "Trikatu", Herbal, &["indigestion"])
            .describe("Blend of black pepper, long pepper and ginger that kindles digestive fire.")
            .dosage("500 mg with honey before meals")
            .duration("2 weeks")
            .precautions(&["Avoid with acidity or ulcers"]),
        treatment("triphala", "Triphala", Herbal, &["indigestion", "chronic_fatigue"])
            .describe("Three-fruit formulation that supports regular digestion and gentle detoxification.")
            .dosage("1 teaspoon powder in warm water at bedtime")
            .duration("4-6 weeks")
            .precautions(&["Reduce the dose if stools become loose"]),
        treatment("light_warm_meals", "Light, Warm Meals", Dietary, &["indigestion", "common_cold"])
            .describe("Freshly cooked, easily digested food such as khichdi and soups, eaten at regular times."),
        treatment("vajrasana", "Vajrasana After Meals", Yoga, &["indigestion", "acid_reflux"])
            .describe("Kneeling posture that aids digestion when held after eating.")
            .instructions("Sit on the heels with a straight spine for 5-10 minutes after each meal.")
            .precautions(&["Skip with knee injuries"]),
        treatment("ashwagandha", "Ashwagandha", Herbal, &["anxiety_disorder", "chronic_fatigue", "arthritis"])
            .describe("Adaptogenic root that supports stress resilience, energy and joint comfort.")
            .dosage("300-600 mg root extract daily")
            .duration("8 weeks")
            .precautions(&["Avoid during pregnancy", "May interact with sedatives"]),
        treatment("nadi_shodhana", "Nadi Shodhana Pranayama", Yoga, &["anxiety_disorder", "insomnia_disorder", "asthma"])
            .describe("Alternate nostril breathing to calm the mind and steady the breath.")
            .instructions("Practise 10 rounds morning and evening on an empty stomach.")
            .duration("Ongoing"),
        treatment("shallaki", "Shallaki (Boswellia)", Herbal, &["arthritis"])
            .describe("Resin extract with anti-inflammatory action on the joints.")
            .dosage("300-500 mg, two to three times daily")
            .duration("8-12 weeks")
            .precautions(&["May cause mild stomach upset"]),
        treatment("abhyanga", "Abhyanga Oil Massage", Procedure, &["arthritis", "chronic_fatigue", "eczema"])
            .describe("Full-body self-massage with warm sesame or medicated oil.")
            .instructions("Massage for 15 minutes before a warm bath.")
            .precautions(&["Avoid on broken or weeping skin"]),
        treatment("gentle_joint_yoga", "Gentle Joint Mobility Yoga", Yoga, &["arthritis"])
            .describe("Sukshma vyayama sequence that moves each joint through a comfortable range.")
            .instructions("Daily, 15-20 minutes, never into pain."),
        treatment("neem_turmeric_paste", "Neem & Turmeric Paste", Herbal, &["eczema"])
            .describe("Topical paste to soothe itching and calm inflamed skin.")
            .instructions("Apply a thin layer to affected areas for 15 minutes, then rinse.")
            .precautions(&["Patch test first", "Turmeric may stain clothing"]),
        treatment("vasaka", "Vasaka (Malabar Nut)", Herbal, &["asthma", "common_cold"])
            .describe("Bronchodilating herb used to loosen phlegm and ease breathing.")
            .dosage("10-20 ml leaf decoction, twice daily")
            .precautions(&["Does not replace prescribed inhalers", "Avoid during pregnancy"]),
        treatment("avoid_triggers", "Avoid Airway Triggers", Lifestyle, &["asthma"])
            .describe("Reduce exposure to smoke, dust, cold air and known allergens.")
            .precautions(&["Seek urgent care for severe breathlessness"]),
        treatment("daily_walk", "Daily Morning Walk", Lifestyle, &["chronic_fatigue", "indigestion"])
            .describe("A brisk 20-30 minute walk in morning sunlight to lift energy and support digestion."),
    ]
}

fn treatment(id: &str, name: &str, category: TreatmentCategory, condition_ids: &[&str]) -> Treatment {
    Treatment {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category,
        instructions: None,
        dosage: None,
        duration: None,
        precautions: Vec::new(),
        condition_ids: condition_ids.iter().map(|c| c.to_string()).collect(),
    }
}

trait TreatmentExt {
    fn describe(self, text: &str) -> Self;
    fn instructions(self, text: &str) -> Self;
    fn dosage(self, text: &str) -> Self;
    fn duration(self, text: &str) -> Self;
    fn precautions(self, items: &[&str]) -> Self;
}

impl TreatmentExt for Treatment {
    fn describe(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    fn instructions(mut self, text: &str) -> Self {
        self.instructions = Some(text.to_string());
        self
    }

    fn dosage(mut self, text: &str) -> Self {
        self.dosage = Some(text.to_string());
        self
    }

    fn duration(mut self, text: &str) -> Self {
        self.duration = Some(text.to_string());
        self
    }

    fn precautions(mut self, items: &[&str]) -> Self {
        self.precautions = items.iter().map(|p| p.to_string()).collect();
        self
    }
}
