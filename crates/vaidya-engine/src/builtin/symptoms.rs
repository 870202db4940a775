use vaidya_core::models::symptom::{Symptom, SymptomCategory};

pub fn all() -> Vec<Symptom> {
    use SymptomCategory::*;

    vec![
        symptom("fatigue", "Fatigue", Physical, Some("Persistent tiredness or lack of energy")),
        symptom("headache", "Headache", Physical, Some("Pain or pressure in the head")),
        symptom("joint_pain", "Joint Pain", Physical, Some("Aching or stiffness in one or more joints")),
        symptom("muscle_ache", "Muscle Ache", Physical, None),
        symptom("back_pain", "Back Pain", Physical, None),
        symptom("fever", "Fever", Physical, Some("Body temperature above normal")),
        symptom("dizziness", "Dizziness", Physical, Some("Light-headedness or loss of balance")),
        symptom("anxiety", "Anxiety", Mental, Some("Excessive worry or nervousness")),
        symptom("irritability", "Irritability", Mental, None),
        symptom("low_mood", "Low Mood", Mental, Some("Feeling sad, flat or hopeless")),
        symptom("poor_concentration", "Poor Concentration", Mental, None),
        symptom("insomnia", "Difficulty Sleeping", Mental, Some("Trouble falling or staying asleep")),
        symptom("bloating", "Bloating", Digestive, Some("Fullness or swelling in the abdomen")),
        symptom("acidity", "Acidity", Digestive, Some("Burning sensation in the chest or throat")),
        symptom("constipation", "Constipation", Digestive, None),
        symptom("loss_of_appetite", "Loss of Appetite", Digestive, None),
        symptom("nausea", "Nausea", Digestive, None),
        symptom("cough", "Cough", Respiratory, None),
        symptom("nasal_congestion", "Nasal Congestion", Respiratory, Some("Blocked or runny nose")),
        symptom("sore_throat", "Sore Throat", Respiratory, None),
        symptom("shortness_of_breath", "Shortness of Breath", Respiratory, None),
        symptom("dry_skin", "Dry Skin", Skin, None),
        symptom("skin_rash", "Skin Rash", Skin, Some("Red, inflamed or bumpy patches")),
        symptom("itching", "Itching", Skin, None),
    ]
}

fn symptom(id: &str, name: &str, category: SymptomCategory, description: Option<&str>) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.map(str::to_string),
    }
}
