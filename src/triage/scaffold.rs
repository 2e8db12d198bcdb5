//! Scaffold synthesis: concrete file artifacts for a single issue.
//!
//! A second keyword dispatch, independent of the classifier, picks a
//! [`ScaffoldKind`] from the issue text. Each kind maps to one or two
//! templates (the content) plus a fixed step list and time estimate (the
//! plan metadata). Templates are plain strings with `%TITLE%` / `%NAME%` /
//! `%BODY%` markers so the brace-heavy scaffold sources never collide with
//! the substitution step.
//!
//! The scaffolds target the web application the issues were filed against;
//! their contents are opaque payloads handed to the commit sink, never
//! written or validated here.

use super::models::{AnalyzedIssue, FileArtifact, Issue, SolutionPlan};

/// Which scaffold a given issue resolves to. Detection order is the contract:
/// login wins over everything, the generic branches are the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldKind {
    /// Login page plus authentication endpoint.
    Login,
    /// Signup/registration page.
    Signup,
    /// Dashboard page with simulated statistics.
    Dashboard,
    /// Generic REST route with GET and POST handlers.
    Api,
    /// Reusable UI component.
    Component,
    /// Fallback patch to an existing component (title mentions fix/bug).
    BugfixPatch,
    /// Fallback new component.
    NewComponent,
}

/// Resolve the scaffold kind for an issue.
///
/// Only the login rule inspects the body; every other rule matches on the
/// title alone. First match wins.
pub fn detect(issue: &Issue) -> ScaffoldKind {
    let title = issue.title.to_lowercase();
    let body = issue.body_text().to_lowercase();

    if title.contains("login") || body.contains("login") {
        ScaffoldKind::Login
    } else if title.contains("signup") || title.contains("register") {
        ScaffoldKind::Signup
    } else if title.contains("dashboard") || title.contains("admin") {
        ScaffoldKind::Dashboard
    } else if title.contains("api") || title.contains("endpoint") {
        ScaffoldKind::Api
    } else if title.contains("component") || title.contains("ui") {
        ScaffoldKind::Component
    } else if title.contains("fix") || title.contains("bug") {
        ScaffoldKind::BugfixPatch
    } else {
        ScaffoldKind::NewComponent
    }
}

/// Strip every non-alphanumeric character from a title.
///
/// `"Add Login Button"` becomes `"AddLoginButton"`; route names additionally
/// lower-case the result.
fn sanitize_title(title: &str) -> String {
    title.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Substitute the placeholder markers a template carries.
fn render(template: &str, title: &str, name: &str, body_line: &str) -> String {
    template
        .replace("%NAME%", name)
        .replace("%TITLE%", title)
        .replace("%BODY%", body_line)
}

/// Synthesize a full solution plan for one issue.
///
/// Pure and deterministic: the same issue always yields a byte-identical
/// plan. Branches 1-5 populate `files_created` only; the generic fallback
/// populates exactly one of the two lists depending on the bugfix split.
pub fn synthesize(issue: &Issue) -> SolutionPlan {
    match detect(issue) {
        ScaffoldKind::Login => login_plan(),
        ScaffoldKind::Signup => signup_plan(),
        ScaffoldKind::Dashboard => dashboard_plan(),
        ScaffoldKind::Api => api_plan(issue),
        ScaffoldKind::Component => component_plan(issue),
        ScaffoldKind::BugfixPatch => bugfix_plan(issue),
        ScaffoldKind::NewComponent => new_component_plan(issue),
    }
}

/// Commit message for a synthesized solution, in the format the commit sink
/// expects: title line, summary, then the step list as bullets.
pub fn commit_message(analyzed: &AnalyzedIssue) -> String {
    let plan_summary = analyzed
        .plan
        .as_ref()
        .map(|p| p.summary.as_str())
        .unwrap_or(analyzed.analysis.solution.as_str());
    let steps = analyzed
        .plan
        .as_ref()
        .map(|p| {
            p.steps
                .iter()
                .map(|s| format!("- {}", s))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();
    format!(
        "AI Solution: {}\n\n{}\n\nImplementation includes:\n{}",
        analyzed.issue.title, plan_summary, steps
    )
}

// ── Branch builders ──────────────────────────────────────────────────

fn login_plan() -> SolutionPlan {
    SolutionPlan {
        summary: "Created a complete login system with authentication page and API endpoint. \
                  Users can now sign in with email/password."
            .to_string(),
        steps: vec![
            "Create login page at /login with form validation".to_string(),
            "Add authentication API endpoint at /api/auth/login".to_string(),
            "Implement client-side form handling with loading states".to_string(),
            "Add redirect to dashboard after successful login".to_string(),
            "Include proper error handling and user feedback".to_string(),
        ],
        files_created: vec![
            FileArtifact::created(
                "app/login/page.tsx",
                LOGIN_PAGE_TEMPLATE,
                "Login page with form validation and authentication",
            ),
            FileArtifact::created(
                "app/api/auth/login/route.ts",
                LOGIN_API_TEMPLATE,
                "Login API endpoint for user authentication",
            ),
        ],
        files_modified: vec![],
        estimated_time: "30 minutes".to_string(),
    }
}

fn signup_plan() -> SolutionPlan {
    SolutionPlan {
        summary: "Created a complete signup system with registration form and validation."
            .to_string(),
        steps: vec![
            "Create signup page with form validation".to_string(),
            "Add password confirmation check".to_string(),
            "Implement form submission handling".to_string(),
            "Add loading states and error handling".to_string(),
        ],
        files_created: vec![FileArtifact::created(
            "app/signup/page.tsx",
            SIGNUP_PAGE_TEMPLATE,
            "Signup page with form validation and user registration",
        )],
        files_modified: vec![],
        estimated_time: "45 minutes".to_string(),
    }
}

fn dashboard_plan() -> SolutionPlan {
    SolutionPlan {
        summary: "Created a comprehensive dashboard with statistics and activity feed.".to_string(),
        steps: vec![
            "Create dashboard layout with responsive grid".to_string(),
            "Add statistics cards for key metrics".to_string(),
            "Implement activity feed section".to_string(),
            "Add data loading simulation".to_string(),
        ],
        files_created: vec![FileArtifact::created(
            "app/dashboard/page.tsx",
            DASHBOARD_PAGE_TEMPLATE,
            "Admin dashboard with statistics and activity monitoring",
        )],
        files_modified: vec![],
        estimated_time: "2 hours".to_string(),
    }
}

fn api_plan(issue: &Issue) -> SolutionPlan {
    let route = sanitize_title(&issue.title).to_lowercase();
    SolutionPlan {
        summary: format!(
            "Created API endpoint for \"{}\" with GET and POST methods.",
            issue.title
        ),
        steps: vec![
            "Created API route structure".to_string(),
            "Implemented GET method for data retrieval".to_string(),
            "Implemented POST method for data processing".to_string(),
            "Added proper error handling".to_string(),
            "Added request validation".to_string(),
        ],
        files_created: vec![FileArtifact::created(
            format!("app/api/{}/route.ts", route),
            render(API_ROUTE_TEMPLATE, &issue.title, &route, ""),
            format!("API endpoint for {}", issue.title),
        )],
        files_modified: vec![],
        estimated_time: "1 hour".to_string(),
    }
}

fn component_plan(issue: &Issue) -> SolutionPlan {
    let name = format!("{}Component", sanitize_title(&issue.title));
    let body_line = if issue.body_text().is_empty() {
        format!("Component created to handle: {}", issue.title)
    } else {
        issue.body_text().to_string()
    };
    SolutionPlan {
        summary: format!(
            "Created reusable component for \"{}\" with proper TypeScript interfaces.",
            issue.title
        ),
        steps: vec![
            "Created component structure with TypeScript".to_string(),
            "Added proper props interface".to_string(),
            "Implemented state management".to_string(),
            "Added loading and error states".to_string(),
            "Styled with Tailwind CSS".to_string(),
        ],
        files_created: vec![FileArtifact::created(
            format!("components/{}.tsx", name),
            render(COMPONENT_TEMPLATE, &issue.title, &name, &body_line),
            format!("Reusable component for {}", issue.title),
        )],
        files_modified: vec![],
        estimated_time: "1 hour".to_string(),
    }
}

fn bugfix_plan(issue: &Issue) -> SolutionPlan {
    SolutionPlan {
        summary: format!(
            "Generated bugfix solution for \"{}\". Fixed the identified issue with proper \
             error handling and validation.",
            issue.title
        ),
        steps: generic_steps(&issue.title, true),
        files_created: vec![],
        files_modified: vec![FileArtifact::modified(
            "components/ExampleComponent.tsx",
            render(PATCH_CHANGES_TEMPLATE, &issue.title, "", ""),
            "Fixed the component to resolve the reported issue",
        )],
        estimated_time: "1-2 hours".to_string(),
    }
}

fn new_component_plan(issue: &Issue) -> SolutionPlan {
    let name = format!("{}Component", sanitize_title(&issue.title));
    let body_line = if issue.body_text().is_empty() {
        format!(
            "This component was generated to address the issue: {}",
            issue.title
        )
    } else {
        issue.body_text().to_string()
    };
    SolutionPlan {
        summary: format!(
            "Generated feature solution for \"{}\". Created new component with full \
             functionality and responsive design.",
            issue.title
        ),
        steps: generic_steps(&issue.title, false),
        files_created: vec![FileArtifact::created(
            format!("components/{}.tsx", name),
            render(GENERIC_COMPONENT_TEMPLATE, &issue.title, &name, &body_line),
            format!("New component created to implement: {}", issue.title),
        )],
        files_modified: vec![],
        estimated_time: "2-4 hours".to_string(),
    }
}

/// Step list for the generic fallback; two of the six steps differ between
/// the bugfix and new-feature paths.
fn generic_steps(title: &str, bugfix: bool) -> Vec<String> {
    vec![
        format!("Analyzed the issue: {}", title),
        if bugfix {
            "Identified the root cause of the bug".to_string()
        } else {
            "Designed the component architecture".to_string()
        },
        if bugfix {
            "Applied the necessary fixes".to_string()
        } else {
            "Implemented the required functionality".to_string()
        },
        "Added proper error handling and validation".to_string(),
        "Tested the implementation".to_string(),
        "Ready for deployment".to_string(),
    ]
}

// ── Templates ────────────────────────────────────────────────────────

const LOGIN_PAGE_TEMPLATE: &str = r##"'use client';

import { useState } from 'react';
import { useRouter } from 'next/navigation';

export default function LoginPage() {
  const [email, setEmail] = useState('');
  const [password, setPassword] = useState('');
  const [loading, setLoading] = useState(false);
  const router = useRouter();

  const handleSubmit = async (e: React.FormEvent) => {
    e.preventDefault();
    setLoading(true);

    try {
      const response = await fetch('/api/auth/login', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ email, password })
      });

      if (response.ok) {
        router.push('/dashboard');
      } else {
        alert('Login failed');
      }
    } catch (error) {
      console.error('Login error:', error);
    }

    setLoading(false);
  };

  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-50">
      <div className="max-w-md w-full space-y-8">
        <div>
          <h2 className="mt-6 text-center text-3xl font-extrabold text-gray-900">
            Sign in to your account
          </h2>
        </div>
        <form className="mt-8 space-y-6" onSubmit={handleSubmit}>
          <div className="rounded-md shadow-sm -space-y-px">
            <div>
              <input
                type="email"
                required
                value={email}
                onChange={(e) => setEmail(e.target.value)}
                className="relative block w-full px-3 py-2 border border-gray-300 rounded-t-md placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                placeholder="Email address"
              />
            </div>
            <div>
              <input
                type="password"
                required
                value={password}
                onChange={(e) => setPassword(e.target.value)}
                className="relative block w-full px-3 py-2 border border-gray-300 rounded-b-md placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                placeholder="Password"
              />
            </div>
          </div>

          <div>
            <button
              type="submit"
              disabled={loading}
              className="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
            >
              {loading ? 'Signing in...' : 'Sign in'}
            </button>
          </div>
        </form>
      </div>
    </div>
  );
}"##;

const LOGIN_API_TEMPLATE: &str = r##"import { NextRequest, NextResponse } from 'next/server';

export async function POST(request: NextRequest) {
  try {
    const { email, password } = await request.json();

    // Simple authentication logic (replace with real auth)
    if (email === 'admin@example.com' && password === 'password') {
      return NextResponse.json({
        success: true,
        user: { email, name: 'Admin User' }
      });
    }

    return NextResponse.json(
      { error: 'Invalid credentials' },
      { status: 401 }
    );
  } catch (error) {
    return NextResponse.json(
      { error: 'Login failed' },
      { status: 500 }
    );
  }
}"##;

const SIGNUP_PAGE_TEMPLATE: &str = r##"'use client';

import { useState } from 'react';
import { useRouter } from 'next/navigation';

export default function SignupPage() {
  const [formData, setFormData] = useState({
    name: '',
    email: '',
    password: '',
    confirmPassword: ''
  });
  const [loading, setLoading] = useState(false);
  const router = useRouter();

  const handleSubmit = async (e: React.FormEvent) => {
    e.preventDefault();
    if (formData.password !== formData.confirmPassword) {
      alert('Passwords do not match');
      return;
    }

    setLoading(true);
    try {
      const response = await fetch('/api/auth/signup', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(formData)
      });

      if (response.ok) {
        router.push('/login');
      } else {
        alert('Signup failed');
      }
    } catch (error) {
      console.error('Signup error:', error);
    }
    setLoading(false);
  };

  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-50">
      <div className="max-w-md w-full space-y-8">
        <h2 className="text-center text-3xl font-extrabold text-gray-900">
          Create your account
        </h2>
        <form onSubmit={handleSubmit} className="space-y-4">
          <input
            type="text"
            placeholder="Full Name"
            value={formData.name}
            onChange={(e) => setFormData({...formData, name: e.target.value})}
            className="w-full px-3 py-2 border border-gray-300 rounded-md"
            required
          />
          <input
            type="email"
            placeholder="Email"
            value={formData.email}
            onChange={(e) => setFormData({...formData, email: e.target.value})}
            className="w-full px-3 py-2 border border-gray-300 rounded-md"
            required
          />
          <input
            type="password"
            placeholder="Password"
            value={formData.password}
            onChange={(e) => setFormData({...formData, password: e.target.value})}
            className="w-full px-3 py-2 border border-gray-300 rounded-md"
            required
          />
          <input
            type="password"
            placeholder="Confirm Password"
            value={formData.confirmPassword}
            onChange={(e) => setFormData({...formData, confirmPassword: e.target.value})}
            className="w-full px-3 py-2 border border-gray-300 rounded-md"
            required
          />
          <button
            type="submit"
            disabled={loading}
            className="w-full py-2 px-4 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 disabled:opacity-50"
          >
            {loading ? 'Creating Account...' : 'Sign Up'}
          </button>
        </form>
      </div>
    </div>
  );
}"##;

const DASHBOARD_PAGE_TEMPLATE: &str = r##"'use client';

import { useState, useEffect } from 'react';

export default function Dashboard() {
  const [stats, setStats] = useState({
    users: 0,
    revenue: 0,
    orders: 0
  });

  useEffect(() => {
    // Simulate data loading
    setStats({
      users: 1234,
      revenue: 45678,
      orders: 890
    });
  }, []);

  return (
    <div className="min-h-screen bg-gray-100 p-8">
      <div className="max-w-7xl mx-auto">
        <h1 className="text-3xl font-bold text-gray-900 mb-8">Dashboard</h1>

        <div className="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
          <div className="bg-white p-6 rounded-lg shadow">
            <h3 className="text-lg font-semibold text-gray-700">Total Users</h3>
            <p className="text-3xl font-bold text-blue-600">{stats.users}</p>
          </div>
          <div className="bg-white p-6 rounded-lg shadow">
            <h3 className="text-lg font-semibold text-gray-700">Revenue</h3>
            <p className="text-3xl font-bold text-green-600">${stats.revenue}</p>
          </div>
          <div className="bg-white p-6 rounded-lg shadow">
            <h3 className="text-lg font-semibold text-gray-700">Orders</h3>
            <p className="text-3xl font-bold text-purple-600">{stats.orders}</p>
          </div>
        </div>

        <div className="bg-white p-6 rounded-lg shadow">
          <h2 className="text-xl font-semibold mb-4">Recent Activity</h2>
          <div className="space-y-2">
            <p className="text-gray-600">New user registered</p>
            <p className="text-gray-600">Order #1234 completed</p>
            <p className="text-gray-600">Payment received</p>
          </div>
        </div>
      </div>
    </div>
  );
}"##;

const API_ROUTE_TEMPLATE: &str = r##"import { NextRequest, NextResponse } from 'next/server';

// API for: %TITLE%
export async function GET(request: NextRequest) {
  try {
    // Implementation for %TITLE%
    const data = {
      message: 'API endpoint created successfully',
      issue: '%TITLE%',
      timestamp: new Date().toISOString()
    };

    return NextResponse.json(data);
  } catch (error) {
    return NextResponse.json(
      { error: 'API request failed' },
      { status: 500 }
    );
  }
}

export async function POST(request: NextRequest) {
  try {
    const body = await request.json();

    // Process the request for %TITLE%
    const result = {
      success: true,
      data: body,
      processed: new Date().toISOString()
    };

    return NextResponse.json(result);
  } catch (error) {
    return NextResponse.json(
      { error: 'Failed to process request' },
      { status: 500 }
    );
  }
}"##;

const COMPONENT_TEMPLATE: &str = r##"'use client';

import { useState, useEffect } from 'react';

// Component for: %TITLE%
interface %NAME%Props {
  title?: string;
  data?: any;
}

export default function %NAME%({ title = '%TITLE%', data }: %NAME%Props) {
  const [loading, setLoading] = useState(false);
  const [result, setResult] = useState(null);

  const handleAction = async () => {
    setLoading(true);
    try {
      // Implementation logic for %TITLE%
      await new Promise(resolve => setTimeout(resolve, 1000));
      setResult('Action completed successfully!');
    } catch (error) {
      console.error('Error:', error);
    }
    setLoading(false);
  };

  return (
    <div className="p-6 bg-white dark:bg-gray-800 rounded-lg shadow-lg border">
      <h3 className="text-xl font-semibold mb-4">{title}</h3>
      <div className="space-y-4">
        <p className="text-gray-600 dark:text-gray-400">
          %BODY%
        </p>
        <button
          onClick={handleAction}
          disabled={loading}
          className="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
        >
          {loading ? 'Processing...' : 'Execute Action'}
        </button>
        {result && (
          <div className="p-3 bg-green-100 dark:bg-green-900/20 text-green-800 dark:text-green-400 rounded">
            {result}
          </div>
        )}
      </div>
    </div>
  );
}"##;

const PATCH_CHANGES_TEMPLATE: &str = r##"// Fix for: %TITLE%
// Updated component to resolve the issue
export default function ExampleComponent() {
  // Fixed implementation
  return (
    <div className="fixed-component">
      <h1>Issue Resolved: %TITLE%</h1>
      <p>This component has been updated to fix the reported issue.</p>
    </div>
  );
}"##;

const GENERIC_COMPONENT_TEMPLATE: &str = r##"'use client';

import { useState } from 'react';

// Component for: %TITLE%
export default function %NAME%() {
  const [data, setData] = useState(null);

  return (
    <div className="p-6 bg-white dark:bg-gray-800 rounded-lg shadow-lg">
      <h2 className="text-2xl font-bold mb-4">%TITLE%</h2>
      <p className="text-gray-600 dark:text-gray-400 mb-4">
        %BODY%
      </p>
      <div className="space-y-4">
        <button
          onClick={() => setData('Implemented!')}
          className="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
        >
          Execute Action
        </button>
        {data && (
          <div className="p-3 bg-green-100 text-green-800 rounded">
            Status: {data}
          </div>
        )}
      </div>
    </div>
  );
}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::models::{Classification, Criticality, IssueAnalysis, IssueState, IssueType};

    fn issue(title: &str, body: Option<&str>) -> Issue {
        Issue {
            id: 1,
            title: title.to_string(),
            body: body.map(str::to_string),
            state: IssueState::Open,
            author: "octocat".to_string(),
        }
    }

    // ── detect ───────────────────────────────────────────────────────

    #[test]
    fn test_login_wins_over_component_language() {
        assert_eq!(detect(&issue("Add Login Button", None)), ScaffoldKind::Login);
    }

    #[test]
    fn test_login_matches_in_body() {
        assert_eq!(
            detect(&issue("Auth flow", Some("the login form hangs"))),
            ScaffoldKind::Login
        );
    }

    #[test]
    fn test_signup_and_register_match_title_only() {
        assert_eq!(detect(&issue("Signup flow", None)), ScaffoldKind::Signup);
        assert_eq!(detect(&issue("Register users", None)), ScaffoldKind::Signup);
        // body mention does not trigger the signup branch
        assert_eq!(
            detect(&issue("Something else", Some("signup is broken"))),
            ScaffoldKind::NewComponent
        );
    }

    #[test]
    fn test_dashboard_and_admin() {
        assert_eq!(detect(&issue("Admin view", None)), ScaffoldKind::Dashboard);
        assert_eq!(
            detect(&issue("New dashboard widgets", None)),
            ScaffoldKind::Dashboard
        );
    }

    #[test]
    fn test_api_and_endpoint() {
        assert_eq!(detect(&issue("Users API", None)), ScaffoldKind::Api);
        assert_eq!(
            detect(&issue("New search endpoint", None)),
            ScaffoldKind::Api
        );
    }

    #[test]
    fn test_component_and_ui() {
        assert_eq!(
            detect(&issue("Card component", None)),
            ScaffoldKind::Component
        );
        assert_eq!(detect(&issue("Polish the UI", None)), ScaffoldKind::Component);
    }

    #[test]
    fn test_generic_splits_on_fix_or_bug() {
        assert_eq!(
            detect(&issue("Fix the footer", None)),
            ScaffoldKind::BugfixPatch
        );
        assert_eq!(
            detect(&issue("Weird bug in footer", None)),
            ScaffoldKind::BugfixPatch
        );
        assert_eq!(
            detect(&issue("Dark mode toggle", None)),
            ScaffoldKind::NewComponent
        );
    }

    // ── sanitize / render ────────────────────────────────────────────

    #[test]
    fn test_sanitize_title_strips_non_alphanumerics() {
        assert_eq!(sanitize_title("Add Login Button"), "AddLoginButton");
        assert_eq!(sanitize_title("fix: crash (v2)!"), "fixcrashv2");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_render_substitutes_all_markers() {
        let out = render("a %TITLE% b %NAME% c %BODY%", "T", "N", "B");
        assert_eq!(out, "a T b N c B");
    }

    // ── synthesize branches ──────────────────────────────────────────

    #[test]
    fn test_login_plan_has_exactly_two_created_artifacts() {
        let plan = synthesize(&issue("Add Login Button", None));
        assert_eq!(plan.files_created.len(), 2);
        assert!(plan.files_modified.is_empty());
        assert_eq!(plan.files_created[0].path, "app/login/page.tsx");
        assert_eq!(plan.files_created[1].path, "app/api/auth/login/route.ts");
        assert_eq!(plan.estimated_time, "30 minutes");
        assert_eq!(plan.steps.len(), 5);
    }

    #[test]
    fn test_signup_plan() {
        let plan = synthesize(&issue("Signup page missing", None));
        assert_eq!(plan.files_created.len(), 1);
        assert_eq!(plan.files_created[0].path, "app/signup/page.tsx");
        assert_eq!(plan.estimated_time, "45 minutes");
        assert_eq!(plan.steps.len(), 4);
    }

    #[test]
    fn test_dashboard_plan() {
        let plan = synthesize(&issue("Admin dashboard", None));
        assert_eq!(plan.files_created[0].path, "app/dashboard/page.tsx");
        assert_eq!(plan.estimated_time, "2 hours");
        let content = plan.files_created[0].content.as_ref().unwrap();
        assert!(content.contains("Recent Activity"));
    }

    #[test]
    fn test_api_plan_derives_route_from_title() {
        let plan = synthesize(&issue("User Stats API!", None));
        assert_eq!(plan.files_created[0].path, "app/api/userstatsapi/route.ts");
        assert_eq!(plan.estimated_time, "1 hour");
        let content = plan.files_created[0].content.as_ref().unwrap();
        assert!(content.contains("// API for: User Stats API!"));
        assert!(!content.contains("%TITLE%"));
    }

    #[test]
    fn test_component_plan_names_with_suffix() {
        let plan = synthesize(&issue("Profile Card Component", None));
        assert_eq!(
            plan.files_created[0].path,
            "components/ProfileCardComponentComponent.tsx"
        );
        let content = plan.files_created[0].content.as_ref().unwrap();
        assert!(content.contains("export default function ProfileCardComponentComponent("));
        assert!(content.contains("Component created to handle: Profile Card Component"));
    }

    #[test]
    fn test_component_plan_prefers_body_text() {
        let plan = synthesize(&issue("Toast UI", Some("Show transient notifications")));
        let content = plan.files_created[0].content.as_ref().unwrap();
        assert!(content.contains("Show transient notifications"));
    }

    #[test]
    fn test_bugfix_plan_modifies_only() {
        let plan = synthesize(&issue("Fix the footer alignment", None));
        assert!(plan.files_created.is_empty());
        assert_eq!(plan.files_modified.len(), 1);
        assert_eq!(
            plan.files_modified[0].path,
            "components/ExampleComponent.tsx"
        );
        assert_eq!(plan.estimated_time, "1-2 hours");
        assert_eq!(plan.steps.len(), 6);
        assert!(plan.steps[1].contains("root cause"));
        let changes = plan.files_modified[0].changes.as_ref().unwrap();
        assert!(changes.contains("// Fix for: Fix the footer alignment"));
    }

    #[test]
    fn test_new_component_plan_creates_only() {
        let plan = synthesize(&issue("Dark mode toggle", None));
        assert!(plan.files_modified.is_empty());
        assert_eq!(
            plan.files_created[0].path,
            "components/DarkmodetoggleComponent.tsx"
        );
        assert_eq!(plan.estimated_time, "2-4 hours");
        assert!(plan.steps[1].contains("architecture"));
    }

    #[test]
    fn test_synthesize_is_idempotent() {
        let i = issue("Fix login timeout", Some("users get logged out"));
        assert_eq!(synthesize(&i), synthesize(&i));
    }

    #[test]
    fn test_no_branch_populates_both_lists() {
        for title in [
            "Add login",
            "signup form",
            "admin page",
            "users api",
            "card component",
            "fix the thing",
            "something new",
        ] {
            let plan = synthesize(&issue(title, None));
            assert!(
                plan.files_created.is_empty() || plan.files_modified.is_empty(),
                "branch for {:?} populated both lists",
                title
            );
            assert!(!plan.files_created.is_empty() || !plan.files_modified.is_empty());
        }
    }

    #[test]
    fn test_no_rendered_template_leaks_markers() {
        for title in ["users api", "card component", "fix it", "brand new thing"] {
            let plan = synthesize(&issue(title, Some("details")));
            for artifact in plan.files_created.iter().chain(&plan.files_modified) {
                let text = artifact
                    .content
                    .as_deref()
                    .or(artifact.changes.as_deref())
                    .unwrap();
                assert!(!text.contains("%TITLE%"));
                assert!(!text.contains("%NAME%"));
                assert!(!text.contains("%BODY%"));
            }
        }
    }

    // ── commit_message ───────────────────────────────────────────────

    #[test]
    fn test_commit_message_format() {
        let i = issue("Add Login Button", None);
        let plan = synthesize(&i);
        let analyzed = AnalyzedIssue {
            analysis: IssueAnalysis {
                classification: Classification::new(IssueType::Security, Criticality::Critical),
                solution: String::new(),
            },
            issue: i,
            plan: Some(plan),
        };
        let msg = commit_message(&analyzed);
        assert!(msg.starts_with("AI Solution: Add Login Button\n\n"));
        assert!(msg.contains("Implementation includes:\n- Create login page at /login"));
    }

    #[test]
    fn test_commit_message_without_plan_uses_outline() {
        let i = issue("Crash on save", None);
        let analyzed = AnalyzedIssue {
            analysis: IssueAnalysis {
                classification: Classification::new(IssueType::Bug, Criticality::Critical),
                solution: "1. Reproduce".to_string(),
            },
            issue: i,
            plan: None,
        };
        let msg = commit_message(&analyzed);
        assert!(msg.contains("1. Reproduce"));
        assert!(msg.ends_with("Implementation includes:\n"));
    }
}
