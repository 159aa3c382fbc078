//! Demo content loaded at startup (unless `SEED_DEMO_DATA=false`).
//!
//! Feedback records keep the sentiment labels they were submitted with, the
//! same as any live submission would; candidates are pushed through the real
//! scorer so their scores and summaries stay consistent with the table.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::analysis::screening::build_summary;
use crate::analysis::sentiment::Sentiment;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::feedback::FeedbackRecord;
use crate::models::interview::{Interview, InterviewStatus};
use crate::models::training::TrainingExample;
use crate::state::AppState;
use crate::store::{CandidateStore, FeedbackStore, InterviewStore};

pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    for record in demo_feedback()? {
        state.feedback.save(record).await?;
    }

    let mut scheduled_candidate = None;
    for (name, job_title, job_description, resume_text, status, created_at) in demo_candidates()? {
        let report = state.skills.score(&resume_text);
        let summary = build_summary(&name, &report);
        let candidate = state
            .candidates
            .save(Candidate {
                id: Uuid::new_v4(),
                name,
                job_title,
                job_description,
                resume_text,
                score: report.score,
                matched_keywords: report.matched_keywords,
                summary,
                status,
                review_notes: None,
                created_at,
            })
            .await?;

        if candidate.status == CandidateStatus::InterviewScheduled {
            scheduled_candidate = Some(candidate.id);
        }
    }

    if let Some(candidate_id) = scheduled_candidate {
        state
            .interviews
            .save(Interview {
                id: Uuid::new_v4(),
                candidate_id,
                scheduled_for: "2025-11-12 10:00".to_string(),
                kind: "video".to_string(),
                status: InterviewStatus::Scheduled,
                notes: "Technical round with the platform team".to_string(),
                created_at: ts(2025, 11, 5, 15, 30)?,
            })
            .await?;
    }

    Ok(())
}

fn demo_feedback() -> Result<Vec<FeedbackRecord>> {
    Ok(vec![
        FeedbackRecord {
            id: Uuid::new_v4(),
            employee_name: "John Smith".to_string(),
            position: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            employment_length: "3 years, 4 months".to_string(),
            exit_date: date(2025, 10, 15)?,
            reason: "Career Advancement".to_string(),
            other_reason: None,
            feedback: "I enjoyed working at the company, but I found a role with more growth \
                       opportunities and better compensation. The team was great to work with, \
                       and I learned a lot during my time here."
                .to_string(),
            sentiment: Sentiment::Positive,
            contact_for_details: true,
            submitted_at: ts(2025, 10, 10, 14, 30)?,
        },
        FeedbackRecord {
            id: Uuid::new_v4(),
            employee_name: "Sarah Johnson".to_string(),
            position: "UX Designer".to_string(),
            department: "Design".to_string(),
            employment_length: "1 year, 8 months".to_string(),
            exit_date: date(2025, 10, 20)?,
            reason: "Relocation".to_string(),
            other_reason: None,
            feedback: "I had to move to another city due to personal reasons. I really enjoyed \
                       my time here and would consider returning if I move back. The work-life \
                       balance and team culture were excellent."
                .to_string(),
            sentiment: Sentiment::Positive,
            contact_for_details: false,
            submitted_at: ts(2025, 10, 15, 9, 15)?,
        },
        FeedbackRecord {
            id: Uuid::new_v4(),
            employee_name: "Michael Chen".to_string(),
            position: "Product Manager".to_string(),
            department: "Product".to_string(),
            employment_length: "2 years".to_string(),
            exit_date: date(2025, 10, 25)?,
            reason: "Better Opportunity".to_string(),
            other_reason: None,
            feedback: "I received an offer for a more senior role with a higher salary. While I \
                       appreciate the experience I gained here, I felt there were limited \
                       opportunities for career growth in my current position."
                .to_string(),
            sentiment: Sentiment::Neutral,
            contact_for_details: true,
            submitted_at: ts(2025, 10, 18, 16, 45)?,
        },
        FeedbackRecord {
            id: Uuid::new_v4(),
            employee_name: "Emily Rodriguez".to_string(),
            position: "Marketing Specialist".to_string(),
            department: "Marketing".to_string(),
            employment_length: "11 months".to_string(),
            exit_date: date(2025, 11, 1)?,
            reason: "Work Environment".to_string(),
            other_reason: None,
            feedback: "I found the work environment to be quite stressful with unrealistic \
                       deadlines. There was a lack of clear communication from management, which \
                       made it difficult to meet expectations. I hope the company can work on \
                       improving these aspects."
                .to_string(),
            sentiment: Sentiment::Negative,
            contact_for_details: false,
            submitted_at: ts(2025, 10, 20, 11, 20)?,
        },
        FeedbackRecord {
            id: Uuid::new_v4(),
            employee_name: "David Kim".to_string(),
            position: "DevOps Engineer".to_string(),
            department: "Engineering".to_string(),
            employment_length: "4 years, 2 months".to_string(),
            exit_date: date(2025, 11, 5)?,
            reason: "Career Change".to_string(),
            other_reason: None,
            feedback: "I've decided to pursue a different career path outside of technology. My \
                       time at the company has been valuable, and I've grown both professionally \
                       and personally. Thank you for the opportunity."
                .to_string(),
            sentiment: Sentiment::Positive,
            contact_for_details: true,
            submitted_at: ts(2025, 10, 22, 13, 10)?,
        },
    ])
}

type DemoCandidate = (String, String, String, String, CandidateStatus, DateTime<Utc>);

fn demo_candidates() -> Result<Vec<DemoCandidate>> {
    let software_engineer_jd = "We are looking for a skilled Software Engineer with experience \
                                in Python, JavaScript, and cloud technologies. The ideal \
                                candidate should have 3+ years of experience in full-stack \
                                development and a strong understanding of software architecture.";
    let data_scientist_jd = "Seeking a Data Scientist with expertise in machine learning, \
                             statistical analysis, and data visualization. The role involves \
                             working with large datasets and developing predictive models to \
                             drive business decisions.";

    Ok(vec![
        (
            "Michael Chen".to_string(),
            "Senior Software Engineer".to_string(),
            software_engineer_jd.to_string(),
            "Michael Chen\nSenior Software Engineer\n\nEXPERIENCE\nSenior Software Engineer, \
             Tech Solutions Inc. | Jan 2020 - Present\n- Led team of 5 developers building \
             scalable microservices\n- Implemented CI/CD pipeline reducing deployment time by \
             60%\n\nSKILLS\nPython, JavaScript, AWS, Docker, Kubernetes, Git, REST API design"
                .to_string(),
            CandidateStatus::Completed,
            ts(2025, 10, 2, 10, 0)?,
        ),
        (
            "Priya Patel".to_string(),
            "Data Scientist".to_string(),
            data_scientist_jd.to_string(),
            "Priya Patel\nData Scientist\n\nEXPERIENCE\nData Scientist, Data Insights LLC | \
             May 2019 - Present\n- Built ML models for predictive analytics with 92% accuracy\n\
             - Led data visualization projects using Tableau\n\nSKILLS\nMachine Learning, \
             Python, R, SQL, Big Data"
                .to_string(),
            CandidateStatus::InReview,
            ts(2025, 10, 9, 14, 20)?,
        ),
        (
            "Marcus Rodriguez".to_string(),
            "DevOps Engineer".to_string(),
            software_engineer_jd.to_string(),
            "Marcus Rodriguez\nDevOps Engineer\n\nEXPERIENCE\nDevOps Engineer, CloudScale Inc. \
             | Aug 2018 - Present\n- Automated deployment processes reducing manual work by 80%\n\
             - Managed Kubernetes clusters with 99.99% uptime\n\nSKILLS\nAWS, Kubernetes, \
             Docker, Terraform, Git, Linux, cloud infrastructure"
                .to_string(),
            CandidateStatus::InterviewScheduled,
            ts(2025, 10, 28, 9, 45)?,
        ),
    ])
}

/// The training-template library. Fixed content, loaded once at startup.
pub fn training_examples() -> Vec<TrainingExample> {
    vec![
        TrainingExample {
            kind: "recruitment".to_string(),
            recorded_at: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap_or_default(),
            instructions: "Focus on technical skills assessment and cultural fit evaluation. \
                           Pay special attention to problem-solving approaches and \
                           communication skills."
                .to_string(),
            sample_qna: "Q: Can you explain your experience with [specific technology]?\n\
                         A: [Expected answer format]\n\nQ: How do you handle tight deadlines?\n\
                         A: [Expected answer format]"
                .to_string(),
        },
        TrainingExample {
            kind: "exit_interview".to_string(),
            recorded_at: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap_or_default(),
            instructions: "Keep questions open-ended and neutral. Probe for specifics on team \
                           dynamics and growth opportunities without leading the answer."
                .to_string(),
            sample_qna: "Q: What prompted you to start looking for a new role?\n\
                         A: [Expected answer format]\n\nQ: What would have made you stay?\n\
                         A: [Expected answer format]"
                .to_string(),
        },
    ]
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .context("invalid seed timestamp")
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).context("invalid seed date")
}
