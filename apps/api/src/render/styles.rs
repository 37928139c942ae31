//! Inline stylesheets for the five themes.
//!
//! `BASE` is emitted before every theme sheet. Technology tags are coloured through
//! `.tech-accent-0/1/2`, which the renderer assigns by `index % 3`.

pub const BASE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
a { text-decoration: none; }
.skill-name { font-weight: 600; }
.entry-description { margin-top: 12px; line-height: 1.6; }
.projects-empty { text-align: center; color: #6b7280; padding: 64px 0; }
"#;

pub const MINIMALIST: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #111827; background: #ffffff; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.header { border-bottom: 1px solid #e5e7eb; padding: 64px 0; text-align: center; }
.name { font-size: 3rem; font-weight: 300; margin-bottom: 16px; }
.bio { font-size: 1.25rem; color: #6b7280; margin-bottom: 32px; }
.social-links { display: flex; justify-content: center; gap: 24px; }
.social-links a { color: #6b7280; transition: color 0.2s; }
.social-links a:hover { color: #111827; }
.section { padding: 64px 0; }
.section h2 { font-size: 2rem; font-weight: 300; text-align: center; margin-bottom: 48px; }
.skills { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-bottom: 48px; }
.skill { display: flex; align-items: center; gap: 8px; padding: 8px 16px; background: #f3f4f6; border-radius: 20px; }
.skill img { width: 20px; height: 20px; }
.experience { margin-bottom: 48px; }
.experience h3 { font-size: 1.5rem; font-weight: 500; margin-bottom: 8px; }
.experience .company { color: #6366f1; font-weight: 500; margin-bottom: 4px; }
.experience .duration { color: #6b7280; font-size: 0.875rem; margin-bottom: 8px; }
.achievement { margin-bottom: 48px; }
.achievement h3 { font-size: 1.5rem; font-weight: 500; margin-bottom: 8px; }
.achievement p { color: #6b7280; line-height: 1.7; }
.project { border-bottom: 1px solid #f3f4f6; padding-bottom: 48px; margin-bottom: 48px; }
.project:last-child { border-bottom: none; }
.project h3 { font-size: 1.5rem; font-weight: 500; margin-bottom: 16px; }
.project p { color: #6b7280; line-height: 1.7; margin-bottom: 16px; }
.project-links { display: flex; gap: 16px; margin-bottom: 16px; }
.project-links a { color: #6366f1; font-weight: 500; }
.project-links a:hover { text-decoration: underline; }
.technologies { display: flex; flex-wrap: wrap; gap: 8px; }
.tech { background: #f3f4f6; color: #374151; padding: 4px 12px; border-radius: 20px; font-size: 0.875rem; }
"#;

pub const DEVFOLIO: &str = r#"
body { font-family: 'Monaco', 'Menlo', monospace; background: linear-gradient(135deg, #f0fdf4 0%, #ecfeff 100%); color: #111827; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.header { padding: 80px 0; }
.terminal { background: #1f2937; color: #10b981; padding: 24px; border-radius: 8px; font-family: monospace; margin-bottom: 32px; }
.terminal-dots { display: flex; gap: 8px; margin-bottom: 12px; }
.dot { width: 12px; height: 12px; border-radius: 50%; }
.dot-red { background: #ef4444; }
.dot-yellow { background: #eab308; }
.dot-green { background: #10b981; }
.terminal-line { margin-left: 16px; }
.token-keyword { color: #3b82f6; }
.token-ident { color: #eab308; }
.token-string { color: #f97316; }
.name { font-size: 3.5rem; font-weight: bold; margin-bottom: 16px; }
.bio { font-size: 1.125rem; color: #6b7280; margin-bottom: 32px; }
.buttons { display: flex; gap: 16px; flex-wrap: wrap; }
.button { display: inline-flex; align-items: center; gap: 8px; padding: 12px 16px; background: rgba(255,255,255,0.8); border-radius: 8px; color: #374151; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1); transition: all 0.2s; }
.button:hover { background: white; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.section { padding: 80px 0; }
.section h2 { font-size: 2.5rem; font-weight: bold; margin-bottom: 48px; }
.skills { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 48px; }
.skill { display: flex; align-items: center; gap: 12px; padding: 16px; background: rgba(255,255,255,0.8); border-radius: 12px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.skill img { width: 24px; height: 24px; }
.experience, .achievement { background: rgba(255,255,255,0.8); padding: 24px; border-radius: 12px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); margin-bottom: 24px; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(350px, 1fr)); gap: 32px; }
.project-card { background: rgba(255,255,255,0.8); padding: 24px; border-radius: 12px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); backdrop-filter: blur(8px); }
.project-card h3 { font-size: 1.25rem; font-weight: bold; margin-bottom: 12px; }
.project-card p { color: #6b7280; line-height: 1.6; margin-bottom: 16px; }
.project-links { display: flex; gap: 16px; margin-bottom: 16px; }
.project-links a { color: #6366f1; font-weight: 500; }
.project-links a:hover { text-decoration: underline; }
.technologies { display: flex; flex-wrap: wrap; gap: 8px; }
.tech { background: linear-gradient(to right, #dcfce7, #dbeafe); color: #374151; padding: 4px 12px; border-radius: 6px; font-size: 0.75rem; font-weight: 500; }
"#;

pub const CREATIVE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: linear-gradient(135deg, #fdf4ff 0%, #fef7ed 100%); color: #111827; overflow-x: hidden; }
.bg-decorations { position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: -1; }
.decoration-1 { position: absolute; top: 80px; left: 80px; width: 300px; height: 300px; background: rgba(168, 85, 247, 0.2); border-radius: 50%; filter: blur(60px); }
.decoration-2 { position: absolute; bottom: 80px; right: 80px; width: 400px; height: 400px; background: rgba(236, 72, 153, 0.2); border-radius: 50%; filter: blur(60px); }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; position: relative; z-index: 1; }
.header { padding: 80px 0 64px; text-align: center; }
.name { font-size: 4rem; font-weight: bold; margin-bottom: 24px; background: linear-gradient(to right, #7c3aed, #ec4899, #f97316); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; }
.bio { font-size: 1.25rem; color: #374151; margin: 0 auto 32px; max-width: 600px; }
.buttons { display: flex; justify-content: center; gap: 16px; flex-wrap: wrap; }
.button { display: inline-flex; align-items: center; gap: 8px; padding: 16px 24px; background: rgba(255,255,255,0.7); backdrop-filter: blur(12px); border-radius: 50px; color: #374151; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); transition: all 0.3s; border: 1px solid rgba(255,255,255,0.2); }
.button:hover { transform: translateY(-2px); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15); }
.section { padding: 80px 0; }
.section h2 { font-size: 3rem; font-weight: bold; margin-bottom: 64px; background: linear-gradient(to right, #7c3aed, #ec4899); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; }
.skills { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 24px; margin-bottom: 64px; }
.skill, .experience, .achievement, .project-card { background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); border-radius: 24px; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1); border: 1px solid rgba(255,255,255,0.2); transition: all 0.3s; }
.skill:hover, .experience:hover, .achievement:hover, .project-card:hover { transform: translateY(-8px); box-shadow: 0 30px 60px rgba(0, 0, 0, 0.15); }
.skill { display: flex; align-items: center; gap: 12px; padding: 20px; }
.skill img { width: 28px; height: 28px; }
.experience, .achievement { padding: 32px; margin-bottom: 32px; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(400px, 1fr)); gap: 32px; }
.project-card { padding: 32px; }
.project-card h3 { font-size: 1.5rem; font-weight: bold; margin-bottom: 16px; }
.project-card p { color: #6b7280; line-height: 1.7; margin-bottom: 24px; }
.project-links { display: flex; gap: 16px; margin-bottom: 16px; }
.project-links a { color: #7c3aed; font-weight: 500; }
.project-links a:hover { text-decoration: underline; }
.technologies { display: flex; flex-wrap: wrap; gap: 8px; }
.tech { padding: 6px 16px; border-radius: 50px; font-size: 0.875rem; font-weight: 500; }
.tech-accent-0 { background: #f3e8ff; color: #7c3aed; }
.tech-accent-1 { background: #fce7f3; color: #ec4899; }
.tech-accent-2 { background: #fed7aa; color: #ea580c; }
"#;

pub const DARKMODE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #111827; color: white; }
.grid-bg { position: fixed; top: 0; left: 0; width: 100%; height: 100%; opacity: 0.1; background-image: linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px); background-size: 20px 20px; pointer-events: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; position: relative; z-index: 1; }
.header { padding: 80px 0 64px; }
.name { font-size: 4rem; font-weight: bold; margin-bottom: 24px; }
.cursor { color: #10b981; }
.bio { font-size: 1.25rem; color: #d1d5db; margin-bottom: 32px; max-width: 700px; }
.buttons { display: flex; gap: 16px; flex-wrap: wrap; }
.button { display: inline-flex; align-items: center; gap: 8px; padding: 12px 24px; background: #1f2937; border: 1px solid #374151; border-radius: 8px; color: white; transition: all 0.3s; }
.button:hover { border-color: #10b981; box-shadow: 0 0 20px rgba(16, 185, 129, 0.2); }
.section { padding: 64px 0; }
.section h2 { font-size: 2.5rem; font-weight: bold; margin-bottom: 48px; }
.skills { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 24px; margin-bottom: 48px; }
.skill, .experience, .achievement, .project-card { background: rgba(31, 41, 55, 0.8); backdrop-filter: blur(8px); border: 1px solid #374151; border-radius: 12px; transition: all 0.3s; }
.skill:hover, .experience:hover, .achievement:hover, .project-card:hover { border-color: #6b7280; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3); }
.skill { display: flex; align-items: center; gap: 12px; padding: 16px; }
.skill img { width: 24px; height: 24px; }
.experience, .achievement { padding: 24px; margin-bottom: 24px; }
.experience .company { color: #10b981; }
.experience .duration { color: #9ca3af; font-size: 0.875rem; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(400px, 1fr)); gap: 32px; }
.project-card { padding: 24px; }
.project-card h3 { font-size: 1.25rem; font-weight: bold; margin-bottom: 12px; color: #10b981; }
.project-card p { color: #d1d5db; line-height: 1.6; margin-bottom: 16px; }
.project-links { display: flex; gap: 16px; margin-bottom: 16px; }
.project-links a { color: #10b981; font-weight: 500; }
.project-links a:hover { text-decoration: underline; }
.technologies { display: flex; flex-wrap: wrap; gap: 8px; }
.tech { padding: 4px 12px; border-radius: 50px; font-size: 0.75rem; font-weight: 500; border: 1px solid; }
.tech-accent-0 { background: rgba(16, 185, 129, 0.1); border-color: rgba(16, 185, 129, 0.2); color: #10b981; }
.tech-accent-1 { background: rgba(59, 130, 246, 0.1); border-color: rgba(59, 130, 246, 0.2); color: #3b82f6; }
.tech-accent-2 { background: rgba(168, 85, 247, 0.1); border-color: rgba(168, 85, 247, 0.2); color: #a855f7; }
"#;

pub const MODERN: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: linear-gradient(135deg, #ecfeff 0%, #dbeafe 50%, #e0e7ff 100%); color: #111827; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.header { padding: 80px 0; }
.header-card { background: rgba(255,255,255,0.7); backdrop-filter: blur(12px); border-radius: 24px; padding: 48px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.1); border: 1px solid rgba(255,255,255,0.2); }
.name { font-size: 4rem; font-weight: bold; margin-bottom: 24px; background: linear-gradient(to right, #0891b2, #3b82f6); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; }
.bio { font-size: 1.25rem; color: #6b7280; margin-bottom: 32px; line-height: 1.7; }
.buttons { display: flex; gap: 16px; flex-wrap: wrap; }
.button { display: inline-flex; align-items: center; gap: 8px; padding: 12px 24px; border-radius: 12px; font-weight: 500; transition: all 0.3s; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
.button-primary { background: linear-gradient(to right, #06b6d4, #3b82f6); color: white; }
.button-secondary { background: rgba(255,255,255,0.5); backdrop-filter: blur(8px); color: #374151; border: 1px solid rgba(255,255,255,0.3); }
.button:hover { transform: scale(1.05); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.section { padding: 80px 0; }
.section h2 { font-size: 3rem; font-weight: bold; text-align: center; margin-bottom: 16px; background: linear-gradient(to right, #0891b2, #3b82f6); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; }
.section-subtitle { text-align: center; font-size: 1.25rem; color: #6b7280; margin-bottom: 64px; }
.skills { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 24px; margin-bottom: 64px; }
.skill, .experience, .achievement, .project-card { background: rgba(255,255,255,0.7); backdrop-filter: blur(12px); border-radius: 16px; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); border: 1px solid rgba(255,255,255,0.2); transition: all 0.3s; }
.skill:hover, .experience:hover, .achievement:hover, .project-card:hover { transform: scale(1.02); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15); }
.skill { display: flex; align-items: center; gap: 16px; padding: 24px; }
.skill img { width: 32px; height: 32px; }
.experience, .achievement { padding: 32px; margin-bottom: 32px; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(450px, 1fr)); gap: 32px; }
.project-card { padding: 32px; }
.project-card h3 { font-size: 1.5rem; font-weight: bold; margin-bottom: 8px; color: #0891b2; }
.project-card p { color: #6b7280; line-height: 1.6; margin-bottom: 24px; }
.project-links { display: flex; gap: 16px; margin-bottom: 16px; }
.project-links a { color: #0891b2; font-weight: 500; }
.project-links a:hover { text-decoration: underline; }
.technologies { display: flex; flex-wrap: wrap; gap: 8px; }
.tech { padding: 8px 16px; border-radius: 12px; font-size: 0.875rem; font-weight: 500; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05); }
.tech-accent-0 { background: linear-gradient(to right, #cffafe, #a5f3fc); color: #0891b2; }
.tech-accent-1 { background: linear-gradient(to right, #dbeafe, #bfdbfe); color: #3b82f6; }
.tech-accent-2 { background: linear-gradient(to right, #e0e7ff, #c7d2fe); color: #6366f1; }
"#;
