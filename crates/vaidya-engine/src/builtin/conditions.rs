use vaidya_core::models::condition::{Condition, SymptomWeight};

pub fn all() -> Vec<Condition> {
    vec![
        condition(
            "common_cold",
            "Common Cold (Pratishyaya)",
            "A viral infection of the nose and throat, seen in Ayurveda as an aggravation of Kapha and Vata.",
            &["Seasonal change", "Weakened immunity", "Exposure to cold and damp"],
            &[
                ("nasal_congestion", 0.9),
                ("sore_throat", 0.7),
                ("cough", 0.6),
                ("fever", 0.5),
                ("headache", 0.3),
                ("fatigue", 0.3),
            ],
        ),
        condition(
            "migraine",
            "Migraine (Ardhavabhedaka)",
            "Recurring, often one-sided headaches that may come with nausea and sensitivity to light.",
            &["Irregular sleep", "Stress", "Skipped meals"],
            &[
                ("headache", 1.0),
                ("nausea", 0.6),
                ("dizziness", 0.5),
                ("irritability", 0.3),
            ],
        ),
        condition(
            "acid_reflux",
            "Acid Reflux (Amlapitta)",
            "Excess acidity rising into the food pipe, associated with aggravated Pitta.",
            &["Spicy or fried food", "Late meals", "Stress"],
            &[
                ("acidity", 1.0),
                ("bloating", 0.5),
                ("nausea", 0.4),
                ("sore_throat", 0.2),
            ],
        ),
        condition(
            "indigestion",
            "Indigestion (Ajirna)",
            "Weak digestive fire (Agni) leading to incomplete digestion of food.",
            &["Overeating", "Irregular meal times", "Sedentary lifestyle"],
            &[
                ("bloating", 0.9),
                ("loss_of_appetite", 0.7),
                ("nausea", 0.5),
                ("constipation", 0.4),
                ("fatigue", 0.2),
            ],
        ),
        condition(
            "arthritis",
            "Arthritis (Sandhivata)",
            "Degeneration and inflammation of the joints, linked to aggravated Vata.",
            &["Age over 50", "Previous joint injury", "Excess body weight"],
            &[
                ("joint_pain", 1.0),
                ("muscle_ache", 0.5),
                ("back_pain", 0.4),
                ("fatigue", 0.3),
            ],
        ),
        condition(
            "anxiety_disorder",
            "Anxiety Disorder (Chittodvega)",
            "Persistent worry and restlessness that interferes with daily activities.",
            &["Chronic stress", "Family history", "Caffeine excess"],
            &[
                ("anxiety", 1.0),
                ("insomnia", 0.6),
                ("irritability", 0.5),
                ("poor_concentration", 0.5),
                ("dizziness", 0.2),
            ],
        ),
        condition(
            "insomnia_disorder",
            "Insomnia (Anidra)",
            "Ongoing difficulty falling or staying asleep, leaving the person unrested.",
            &["Screen use before bed", "Irregular schedule", "Stress"],
            &[
                ("insomnia", 1.0),
                ("fatigue", 0.6),
                ("poor_concentration", 0.5),
                ("irritability", 0.4),
                ("low_mood", 0.3),
            ],
        ),
        condition(
            "depressive_episode",
            "Depressive Episode (Vishada)",
            "A sustained period of low mood and loss of interest. Needs professional assessment.",
            &["Major life stress", "Family history", "Chronic illness"],
            &[
                ("low_mood", 1.0),
                ("fatigue", 0.5),
                ("poor_concentration", 0.5),
                ("loss_of_appetite", 0.4),
                ("insomnia", 0.4),
            ],
        ),
        condition(
            "eczema",
            "Eczema (Vicharchika)",
            "Inflamed, itchy and dry patches of skin that flare periodically.",
            &["Allergies", "Dry climate", "Harsh soaps"],
            &[("itching", 1.0), ("skin_rash", 0.9), ("dry_skin", 0.7)],
        ),
        condition(
            "asthma",
            "Asthma (Tamaka Shwasa)",
            "Narrowing of the airways causing breathlessness and wheezing.",
            &["Air pollution", "Allergens", "Smoking"],
            &[
                ("shortness_of_breath", 1.0),
                ("cough", 0.7),
                ("fatigue", 0.2),
            ],
        ),
        condition(
            "chronic_fatigue",
            "Chronic Fatigue",
            "Long-lasting exhaustion not relieved by rest.",
            &["Poor sleep", "Nutritional deficiency", "Prolonged stress"],
            &[
                ("fatigue", 1.0),
                ("muscle_ache", 0.5),
                ("poor_concentration", 0.5),
                ("low_mood", 0.4),
                ("insomnia", 0.3),
            ],
        ),
    ]
}

fn condition(
    id: &str,
    name: &str,
    description: &str,
    risk_factors: &[&str],
    weights: &[(&str, f64)],
) -> Condition {
    Condition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        risk_factors: risk_factors.iter().map(|f| f.to_string()).collect(),
        symptom_weights: weights
            .iter()
            .map(|&(symptom_id, weight)| SymptomWeight {
                symptom_id: symptom_id.to_string(),
                weight,
            })
            .collect(),
    }
}
