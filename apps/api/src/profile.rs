//! Static profile document injected into every persona prompt.
//!
//! Single source of truth: every prompt that needs the profile embeds
//! `PROFILE` verbatim, so the bytes sent upstream never differ between
//! endpoints.

pub const PROFILE: &str = "
PROFESSIONAL PROFILE — Virginia | AI/ML Leader & Consultant

CURRENT ROLE: AI/ML Manager at Emerson (Measurement Solutions Division)
- Leading a global team of 15+ data scientists and AI/ML engineers across 6 locations (Minnesota, Colorado, Costa Rica, Berlin, Cluj, Pune)
- Managing ~$2M annual budget for AI/ML initiatives
- Built the AI/ML capability from the ground up, scaling from a small group to 15+ professionals

KEY ACHIEVEMENTS:
- Tech Expert Chatbot: Achieved 87% accuracy, full AI Governance Board approval, projected $4.8M annual savings
- Next Generation Customer Care (NGCC): $7-8M transformation program with Deloitte (42-week project)
- Innovation Lab Framework: Compressed AI development cycles from 18-24 months to 2-4 weeks (CMMC in 2 days, ISA in 3 days)
- Target Discount Engine and Configure-to-Order automation initiatives
- AI Governance frameworks using Gartner TRiSM methodology
- Comprehensive AI portfolio management systems

TECHNICAL EXPERTISE:
- AI/ML Strategy & Governance
- Large Language Models (LLMs) & Chatbot Development
- AI Governance (Gartner TRiSM framework)
- Data Science & Analytics
- NLP / Natural Language Processing
- Machine Learning Engineering
- MLOps & Model Deployment
- Cloud Platforms (Databricks, Azure)
- Python, Data Pipelines, ETL
- Rapid Prototyping & Innovation Labs

LEADERSHIP & MANAGEMENT:
- Global team management across 6 international locations
- Vendor relationship management (Databricks, Deloitte, Mavenoid)
- Cross-functional stakeholder management (Legal, Security, HR, Compliance, Enterprise IT)
- Budget management (~$2M)
- Hybrid team building (FTEs + strategic contractors)
- Joint Architecture Review processes bridging AI and data functions

INDUSTRY EXPERIENCE:
- Emerson (Manufacturing / Industrial Automation) — AI/ML Manager
- Zeiss (Optics / Precision Technology) — AI Initiatives
- Medtronic (Medical Devices / Healthcare Technology)
- IBM (Semiconductor / ASIC Design) — Engineering

EDUCATION & CERTIFICATIONS:
- Engineering background (IBM ASIC Design)
- Cornell University — AI/ML Certifications
- Continuous learning in AI, data science, and leadership

CONSULTING SERVICES (AI Tech Magic):
- AI Strategy & Roadmap Development
- AI Governance & Responsible AI Frameworks
- Rapid AI Prototyping & Innovation Labs (2-4 week sprints)
- LLM/Chatbot Implementation & Optimization
- AI Team Building & Scaling
- Digital Transformation with AI
- Manufacturing & Industrial AI Applications
- AI Portfolio Management & Prioritization
";
