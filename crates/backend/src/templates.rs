pub const COVER_LETTER_TEMPLATE: &str = "Dear Hiring Manager,

I am writing to express my strong interest in the position outlined in your job posting. With my background and experience detailed in my attached CV, I am excited about the opportunity to contribute to your team.

Based on the job requirements you've described, I believe my skills align perfectly with what you're looking for:

• Proven track record in relevant technologies and methodologies
• Strong problem-solving abilities and analytical thinking
• Excellent communication and collaboration skills
• Passion for continuous learning and professional development

What particularly excites me about this role is the opportunity to work with innovative technologies and contribute to meaningful projects. Your company's commitment to excellence and innovation aligns perfectly with my career aspirations and values.

I am confident that my technical expertise, combined with my enthusiasm for tackling challenging problems, makes me an ideal candidate for this position. I would welcome the opportunity to discuss how I can contribute to your team's continued success.

Thank you for considering my application. I look forward to hearing from you soon.

Best regards,
[Your Name]";
