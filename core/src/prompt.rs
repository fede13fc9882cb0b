//! Fixed instruction template wrapped around every symptom description.

/// Example symptom to department mappings given to the model as guidance.
pub const DEPARTMENT_EXAMPLES: [(&str, &str); 9] = [
    ("Headache, fever, body aches, cough", "General Physician"),
    ("Skin rash, itching, acne", "Dermatology"),
    (
        "Chest pain, shortness of breath, palpitations",
        "Cardiology",
    ),
    ("Joint pain, swelling, stiffness", "Orthopedics or Rheumatology"),
    ("Eye redness, blurred vision, eye pain", "Ophthalmology"),
    (
        "Earache, sore throat, difficulty swallowing",
        "ENT (Ear, Nose, Throat)",
    ),
    (
        "Abdominal pain, nausea, vomiting, diarrhea",
        "Gastroenterology",
    ),
    (
        "Frequent urination, burning sensation during urination",
        "Urology",
    ),
    (
        "Anxiety, persistent sadness, difficulty concentrating",
        "Psychiatry or Psychology",
    ),
];

const PREAMBLE: &str = "You are a medical symptom analysis chatbot. \
Your goal is to recommend the most appropriate medical department or specialist \
based on the symptoms provided by the user.
Do NOT provide medical advice, diagnoses, or treatment. Only recommend a department.
If symptoms are vague or insufficient, ask for more details or suggest a general physician.";

const CLOSING: &str = "Based on these symptoms, which medical department should the user consult?
Please respond concisely with only the department name or a request for more information.";

/// Renders the full prompt for one symptom description.
///
/// The description is embedded verbatim; nothing is escaped or trimmed.
pub fn build_prompt(symptoms: &str) -> String {
    let mut prompt = String::with_capacity(1024 + symptoms.len());
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\nHere are some examples of symptom-to-department mappings:\n");
    for (symptom, department) in DEPARTMENT_EXAMPLES {
        prompt.push_str(&format!("- {}: {}\n", symptom, department));
    }
    prompt.push_str(&format!("\nUser symptoms: \"{}\"\n", symptoms));
    prompt.push_str(CLOSING);
    prompt
}
