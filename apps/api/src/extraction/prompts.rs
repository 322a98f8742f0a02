// All LLM prompt constants for skill extraction.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Task statement placed between the persona and the output rules in the system instruction.
pub const EXTRACTION_TASK: &str = "You extract hard skills from job descriptions and rate \
    how confident you are that each skill is relevant.";

/// Few-shot example pairs: (job description, expected output lines).
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "The Platform Emerging Technology team is a collection of engineers focused on \
providing enablement and acceleration for other teams that are delivering products which \
leverage emergent technologies. Drive the implementation and refinement of a cutting-edge \
framework, deployed on Google Kubernetes Engine (GKE) within Google Cloud Platform (GCP), \
empowering development teams to seamlessly integrate with Generative AI technologies. \
Champion best practices in software engineering, including code quality, testing, and \
documentation.",
        "Generative AI: 0.98
Google Kubernetes Engine (GKE): 0.95
Google Cloud Platform (GCP): 0.95
software engineering: 0.90
code quality: 0.85
documentation: 0.80",
    ),
    (
        "We are seeking a highly skilled and motivated Human Performance Data Scientist to \
join our team. The ideal candidate will be experienced in extracting insights from complex \
datasets, visualizing data through compelling reports, and supporting human-performance \
initiatives. Use Python and/or R for advanced data analysis, statistical modeling, and \
automation. Develop dashboards and reports using Power BI, Teamworks AMS, or similar data \
visualization tools.",
        "Python: 0.98
R: 0.98
data analysis: 0.95
statistical modeling: 0.95
Power BI: 0.90
data visualization: 0.90
Teamworks AMS: 0.85",
    ),
];

/// Extraction prompt template.
/// Replace: {examples}, {jd_text}
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract all data science-related skills, tools, and technologies from the job description below. Focus on hard skills like programming languages, libraries, databases, cloud platforms, and methodologies.

For each skill, give a confidence score between 0 and 1 indicating how certain you are that it is a relevant skill for the role. 1.0 means highly certain; lower values mean less certainty.

OUTPUT FORMAT (exactly one skill per line, nothing else):
skill name: score

--- Examples ---
{examples}
--- Job Description ---
{jd_text}

--- Output ---"#;
