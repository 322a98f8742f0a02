//! Static catalog of portfolio-project templates keyed by skill name.

use crate::models::analysis::ProjectIdea;

struct IdeaTemplate {
    /// Lowercase names and aliases that select this template.
    keys: &'static [&'static str],
    title: &'static str,
    description: &'static str,
}

const CATALOG: &[IdeaTemplate] = &[
    IdeaTemplate {
        keys: &["python", "pandas", "numpy"],
        title: "Automated Data Cleaning Toolkit",
        description: "Build a Python package that profiles a messy public dataset, fixes \
            types, missing values and duplicates, and publishes a before/after quality report.",
    },
    IdeaTemplate {
        keys: &["sql", "postgresql", "mysql", "databases"],
        title: "Retail Sales Analytics Warehouse",
        description: "Model an open retail dataset as a star schema, load it into a SQL \
            database, and write analytical queries for cohort retention and revenue trends.",
    },
    IdeaTemplate {
        keys: &["r", "r programming"],
        title: "Public Health Trends in R",
        description: "Use R and the tidyverse to analyse open public-health data and publish \
            a reproducible R Markdown report with statistical tests and charts.",
    },
    IdeaTemplate {
        keys: &["power bi", "tableau", "looker", "dashboards"],
        title: "Interactive KPI Dashboard",
        description: "Design a multi-page dashboard for an open business dataset with drill \
            downs, filters, and a short narrative explaining the key performance indicators.",
    },
    IdeaTemplate {
        keys: &["excel", "microsoft excel", "spreadsheets"],
        title: "Budget Forecasting Workbook",
        description: "Create an Excel workbook that ingests monthly expense data, builds pivot \
            summaries, and forecasts the next quarter with scenario toggles.",
    },
    IdeaTemplate {
        keys: &["data visualization", "data visualisation", "matplotlib", "d3.js"],
        title: "Visual Story of Urban Mobility",
        description: "Turn open bike-share or transit data into a scrollable visual story \
            that highlights daily patterns, seasonality, and outliers.",
    },
    IdeaTemplate {
        keys: &["data analysis", "analytics", "exploratory data analysis"],
        title: "Exploratory Analysis of Job Postings",
        description: "Collect a sample of job postings, analyse which skills co-occur, and \
            summarise the findings in a notebook with clear recommendations.",
    },
    IdeaTemplate {
        keys: &["statistics", "statistical modeling", "statistical modelling", "a/b testing"],
        title: "A/B Test Analysis Framework",
        description: "Simulate or source an experiment dataset and build a reusable analysis \
            covering power calculation, hypothesis testing, and effect-size reporting.",
    },
    IdeaTemplate {
        keys: &["machine learning", "scikit-learn", "ml"],
        title: "Customer Churn Prediction",
        description: "Train and compare classification models on a churn dataset, explain \
            the predictions with feature importance, and serve the best model behind a small API.",
    },
    IdeaTemplate {
        keys: &["deep learning", "pytorch", "tensorflow", "keras"],
        title: "Image Classifier with Transfer Learning",
        description: "Fine-tune a pretrained convolutional network on a niche image dataset \
            and document accuracy, confusion cases, and training curves.",
    },
    IdeaTemplate {
        keys: &["nlp", "natural language processing", "text mining"],
        title: "Review Sentiment Analyzer",
        description: "Build a pipeline that classifies product review sentiment and extracts \
            the most frequent complaint topics, with an evaluation against labelled data.",
    },
    IdeaTemplate {
        keys: &["generative ai", "llm", "large language models", "prompt engineering"],
        title: "Document Q&A Assistant",
        description: "Build a retrieval-augmented assistant that answers questions over a \
            document collection and measures answer quality against a small test set.",
    },
    IdeaTemplate {
        keys: &["spark", "apache spark", "pyspark", "big data"],
        title: "Large-Scale Log Processing Pipeline",
        description: "Process a multi-gigabyte public log dataset with Spark, compute \
            sessionised metrics, and compare runtime across partitioning strategies.",
    },
    IdeaTemplate {
        keys: &["aws", "amazon web services", "gcp", "google cloud platform (gcp)", "azure"],
        title: "Serverless Data Ingestion on the Cloud",
        description: "Deploy a scheduled cloud function that pulls an open API, lands the \
            data in object storage, and loads it into a managed warehouse table.",
    },
    IdeaTemplate {
        keys: &["docker", "kubernetes", "google kubernetes engine (gke)", "mlops"],
        title: "Containerised Model Deployment",
        description: "Package a trained model as a container image, deploy it with health \
            checks and autoscaling, and add a load test report.",
    },
    IdeaTemplate {
        keys: &["etl", "data engineering", "airflow", "data pipelines"],
        title: "Orchestrated ETL Pipeline",
        description: "Build a scheduled pipeline that extracts, validates, and loads a daily \
            dataset, with alerting on failed data-quality checks.",
    },
];

const FALLBACK_TITLE: &str = "{skill} Portfolio Showcase";
const FALLBACK_DESCRIPTION: &str = "Pick an open dataset relevant to the role and build an \
    end-to-end project that applies {skill}: define a question, do the work, and publish a \
    short write-up of the results and what you would improve next.";

/// Looks up a canned idea for `skill`, or the generic template if none matches.
pub fn idea_for(skill: &str) -> ProjectIdea {
    let key = skill.trim().to_lowercase();

    match CATALOG.iter().find(|t| t.keys.contains(&key.as_str())) {
        Some(template) => ProjectIdea {
            title: template.title.to_string(),
            description: template.description.to_string(),
            related_skill: skill.to_string(),
        },
        None => fallback_idea(skill),
    }
}

/// Generic template used for skills with no catalog entry.
pub fn fallback_idea(skill: &str) -> ProjectIdea {
    ProjectIdea {
        title: FALLBACK_TITLE.replace("{skill}", skill),
        description: FALLBACK_DESCRIPTION.replace("{skill}", skill),
        related_skill: skill.to_string(),
    }
}
