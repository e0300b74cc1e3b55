//! Terms of Service and Privacy Policy, stored as Markdown

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LegalDoc {
    pub title: &'static str,
    pub effective_date: &'static str,
    pub body: &'static str,
}

pub const TERMS: LegalDoc = LegalDoc {
    title: "Terms of Service – Nodal",
    effective_date: "October 14, 2025",
    body: r#"Welcome to Nodal! By using our app, website, or services (“Services”), you agree to these Terms of Service. If you don’t agree, don’t use the app. Simple as that.

## 1. Using Nodal

- You must be 13+ to use Nodal.
- You’re responsible for your account info, password, and any activity that happens on your account.
- Don’t be a jerk: no illegal stuff, no spamming, no breaking the app.

## 2. Account & Content

- You own the content you create (boards, nodes, notes).
- You grant Nodal a license to operate the app, store, and display your content while you use the service.
- Don’t post anything illegal, harmful, or infringing someone else’s rights.

## 3. Privacy & Data

- We collect information as described in our [Privacy Policy](/privacy).
- We may send you emails about your account, updates, or service announcements.

## 4. Termination

- We can suspend or delete accounts for violations of these Terms.
- You can close your account anytime, but we may retain some data for legal or operational reasons.

## 5. Disclaimer & Limitation of Liability

- Nodal is provided “as is.” We try our best, but we don’t guarantee the app will always work perfectly.
- We are not liable for lost data, downtime, or any indirect damages.

## 6. Changes to Terms

We may update these Terms from time to time. We’ll post the changes here and update the effective date.

Thanks for using Nodal! Play nice, make cool boards, and enjoy your nodes.
"#,
};

pub const PRIVACY: LegalDoc = LegalDoc {
    title: "Privacy Policy – Nodal",
    effective_date: "October 14, 2025",
    body: r#"At Nodal, your privacy is important to us. This Privacy Policy explains what we collect, why, and how we use it.

## 1. Information We Collect

- Account info: email, username, password (if you use email login)
- OAuth info: if you sign in via Google/GitHub, we collect the info they share with us
- Content: boards, nodes, notes
- Usage: how you interact with the app (pages visited, actions taken)

## 2. How We Use Your Info

- To provide and improve Nodal
- To communicate with you about your account, updates, or support
- To personalize your experience

## 3. Sharing Your Info

- We don’t sell your info. Ever.
- We may share data with service providers (like Postmark for emails, analytics providers) who help us run the app
- We may disclose info if required by law or to protect rights

## 4. Cookies & Tracking

- We use cookies and similar tools to make the app work and understand usage
- You can manage cookies via your browser settings

## 5. Security

- We take reasonable measures to protect your info, but no system is 100% secure
- You are responsible for keeping your password safe

## 6. Changes to This Policy

We may update this Privacy Policy. The “Effective Date” will show when it was last updated.

Enjoy Nodal, and keep your nodes happy!
"#,
};
